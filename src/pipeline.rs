//! Fetch → normalize → render → dedupe → serialize.

use crate::calendar::{Calendar, CalendarEvent, CalendarHeader, dedupe_by_uid};
use crate::config::Config;
use crate::data_fetcher::{fetch_team_events, normalize};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Builds the full calendar for every configured team.
///
/// Teams are processed in configuration order, past fixtures before upcoming
/// ones, and no chronological sort is applied. Any fetch error aborts the
/// build before anything is written.
#[instrument(skip_all)]
pub async fn build_calendar(
    client: &Client,
    config: &Config,
    generated_at: DateTime<Utc>,
) -> Result<Calendar, AppError> {
    let mut events = Vec::new();

    for team in &config.teams {
        let raw_events = fetch_team_events(client, config, team).await?;
        let before = events.len();

        events.extend(
            raw_events
                .iter()
                .filter_map(|raw| normalize(raw, team.sport))
                .map(|fixture| CalendarEvent::from_fixture(&fixture, &team.emoji, generated_at)),
        );

        info!(
            "Rendered {} of {} {} fixtures",
            events.len() - before,
            raw_events.len(),
            team.sport
        );
    }

    let total = events.len();
    let events = dedupe_by_uid(events);
    info!(
        "Calendar has {} events ({} duplicates removed)",
        events.len(),
        total - events.len()
    );

    let header = CalendarHeader {
        name: config.calendar_name.clone(),
        timezone: config.calendar_timezone.clone(),
        ..CalendarHeader::default()
    };

    Ok(Calendar::new(header, events))
}

/// Sibling file the calendar is staged in before it replaces `path`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes the serialized calendar, replacing any previous file at `path`.
///
/// The text is staged in a sibling file and renamed over the target, so a
/// failed write leaves the previous calendar in place.
pub async fn write_calendar(calendar: &Calendar, path: &str) -> Result<(), AppError> {
    let target = Path::new(path);
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::output_write(path, e.to_string()))?;
    }

    let staging = staging_path(target);
    let staged = async {
        tokio::fs::write(&staging, calendar.to_ics_string()).await?;
        tokio::fs::rename(&staging, target).await
    }
    .await;

    if let Err(e) = staged {
        if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
            debug!("Could not remove {}: {cleanup}", staging.display());
        }
        return Err(AppError::output_write(path, e.to_string()));
    }

    info!("Wrote {} events to {path}", calendar.events.len());
    Ok(())
}
