use crate::config::Config;
use crate::data_fetcher::models::{EventsPage, RawEvent, Selector, TrackedTeam};
use crate::error::AppError;
use reqwest::Client;
use tracing::{debug, info, instrument};

use super::fetch_utils::fetch;
use super::urls::build_team_events_url;

/// Fetches pages `0..max_pages` of a team's fixtures and concatenates them.
///
/// The first page with no events ends the walk early; a short but non-empty
/// page does not. Pages are requested strictly one after another and the
/// first failing request aborts the whole walk.
#[instrument(skip(client, api_domain))]
pub async fn fetch_pages(
    client: &Client,
    api_domain: &str,
    team_id: u64,
    selector: Selector,
    max_pages: u32,
) -> Result<Vec<RawEvent>, AppError> {
    let mut all_events = Vec::new();

    for page in 0..max_pages {
        let url = build_team_events_url(api_domain, team_id, selector, page);
        let response: EventsPage = fetch(client, &url).await?;

        if response.events.is_empty() {
            debug!("Page {page} of team {team_id} ({selector}) is empty, stopping");
            break;
        }

        debug!(
            "Page {page} of team {team_id} ({selector}) returned {} events",
            response.events.len()
        );
        all_events.extend(response.events);
    }

    Ok(all_events)
}

/// Fetches every past fixture followed by every upcoming fixture of a team.
pub async fn fetch_team_events(
    client: &Client,
    config: &Config,
    team: &TrackedTeam,
) -> Result<Vec<RawEvent>, AppError> {
    let mut events =
        fetch_pages(client, &config.api_domain, team.id, Selector::Last, config.max_pages).await?;
    let past_count = events.len();

    events.extend(
        fetch_pages(client, &config.api_domain, team.id, Selector::Next, config.max_pages).await?,
    );

    info!(
        "Fetched {} {} fixtures for team {} ({} past, {} upcoming)",
        events.len(),
        team.sport,
        team.id,
        past_count,
        events.len() - past_count
    );

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::models::Sport;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn create_mock_config(api_domain: String) -> Config {
        Config {
            api_domain,
            max_pages: 10,
            ..Config::default()
        }
    }

    fn events_body(ids: &[u64]) -> serde_json::Value {
        let events: Vec<_> = ids
            .iter()
            .map(|id| json!({"id": id, "startTimestamp": 1_700_000_000 + *id as i64}))
            .collect();
        json!({ "events": events })
    }

    async fn mount_page(server: &MockServer, page_path: &str, ids: &[u64], expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(page_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(events_body(ids)))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_pages_stops_on_empty_page() {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, "/team/42/events/next/0", &[1, 2], 1).await;
        mount_page(&mock_server, "/team/42/events/next/1", &[], 1).await;
        mount_page(&mock_server, "/team/42/events/next/2", &[3], 0).await;

        let client = create_test_http_client();
        let events = fetch_pages(&client, &mock_server.uri(), 42, Selector::Next, 10)
            .await
            .unwrap();

        let ids: Vec<_> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_fetch_pages_continues_past_short_pages() {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, "/team/42/events/last/0", &[1, 2, 3], 1).await;
        mount_page(&mock_server, "/team/42/events/last/1", &[4], 1).await;
        mount_page(&mock_server, "/team/42/events/last/2", &[5], 1).await;
        mount_page(&mock_server, "/team/42/events/last/3", &[], 1).await;

        let client = create_test_http_client();
        let events = fetch_pages(&client, &mock_server.uri(), 42, Selector::Last, 10)
            .await
            .unwrap();

        assert_eq!(events.len(), 5);
        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_fetch_pages_respects_page_cap() {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, "/team/42/events/next/0", &[1], 1).await;
        mount_page(&mock_server, "/team/42/events/next/1", &[2], 1).await;
        mount_page(&mock_server, "/team/42/events/next/2", &[3], 0).await;

        let client = create_test_http_client();
        let events = fetch_pages(&client, &mock_server.uri(), 42, Selector::Next, 2)
            .await
            .unwrap();

        assert_eq!(events.len(), 2);
        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_fetch_pages_zero_cap_makes_no_requests() {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, "/team/42/events/next/0", &[1], 0).await;

        let client = create_test_http_client();
        let events = fetch_pages(&client, &mock_server.uri(), 42, Selector::Next, 0)
            .await
            .unwrap();

        assert!(events.is_empty());
        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_fetch_pages_propagates_errors() {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, "/team/42/events/next/0", &[1], 1).await;
        Mock::given(method("GET"))
            .and(path("/team/42/events/next/1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_pages(&client, &mock_server.uri(), 42, Selector::Next, 10).await;

        assert!(matches!(result, Err(AppError::ApiServerError { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_fetch_team_events_past_before_upcoming() {
        let mock_server = MockServer::start().await;
        mount_page(&mock_server, "/team/7/events/last/0", &[10, 11], 1).await;
        mount_page(&mock_server, "/team/7/events/last/1", &[], 1).await;
        mount_page(&mock_server, "/team/7/events/next/0", &[20], 1).await;
        mount_page(&mock_server, "/team/7/events/next/1", &[], 1).await;

        let client = create_test_http_client();
        let config = create_mock_config(mock_server.uri());
        let team = TrackedTeam::new(7, Sport::Basket, "🏀");

        let events = fetch_team_events(&client, &config, &team).await.unwrap();
        let ids: Vec<_> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![Some(10), Some(11), Some(20)]);
    }
}
