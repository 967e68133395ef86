use crate::constants::calendar::{UID_DOMAIN, UID_PREFIX};
use crate::data_fetcher::models::{NamedEntity, RawEvent, Sport};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// A fixture after field extraction and default substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub sport: Sport,
    pub start: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    pub tournament: String,
    /// Stable UID, identical across runs for the same remote fixture
    pub uid: String,
}

/// Trims a wire name, falling back to `default` when absent or blank.
fn name_or(entity: Option<&NamedEntity>, default: &str) -> String {
    entity
        .and_then(|e| e.name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Builds the UID of a fixture from the parts that never change between runs.
///
/// ```
/// use fixture_calendar::data_fetcher::processors::build_uid;
/// use fixture_calendar::data_fetcher::models::Sport;
///
/// assert_eq!(
///     build_uid(Sport::Football, Some(11), 1700000000),
///     "sofascore-football-11-1700000000@lucabalo.github.io"
/// );
/// ```
pub fn build_uid(sport: Sport, event_id: Option<u64>, start_timestamp: i64) -> String {
    let event_id = event_id.map(|id| id.to_string()).unwrap_or_default();
    format!("{UID_PREFIX}-{sport}-{event_id}-{start_timestamp}@{UID_DOMAIN}")
}

/// Converts a raw SofaScore event into a [`Fixture`].
///
/// Returns `None` when the event has no usable start timestamp. A timestamp
/// of zero counts as missing.
pub fn normalize(raw: &RawEvent, sport: Sport) -> Option<Fixture> {
    let timestamp = match raw.start_timestamp {
        Some(ts) if ts != 0 => ts,
        _ => {
            debug!("Skipping {sport} event {:?} without start timestamp", raw.id);
            return None;
        }
    };

    let Some(start) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        warn!("Skipping {sport} event {:?}: timestamp {timestamp} out of range", raw.id);
        return None;
    };

    Some(Fixture {
        sport,
        start,
        home_team: name_or(raw.home_team.as_ref(), "Home"),
        away_team: name_or(raw.away_team.as_ref(), "Away"),
        tournament: name_or(raw.tournament.as_ref(), sport.as_str()),
        uid: build_uid(sport, raw.id, timestamp),
    })
}
