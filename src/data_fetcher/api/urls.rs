//! URL building utilities for API endpoints

use crate::data_fetcher::models::Selector;

/// Builds the URL of one page of a team's fixtures.
///
/// # Arguments
/// * `api_domain` - The base API URL, e.g. `https://www.sofascore.com/api/v1`
/// * `team_id` - SofaScore team identifier
/// * `selector` - Past (`last`) or upcoming (`next`) fixtures
/// * `page` - Zero-based page index
///
/// # Example
/// ```
/// use fixture_calendar::data_fetcher::api::build_team_events_url;
/// use fixture_calendar::data_fetcher::models::Selector;
///
/// let url = build_team_events_url("https://api.example.com", 3052, Selector::Next, 0);
/// assert_eq!(url, "https://api.example.com/team/3052/events/next/0");
/// ```
pub fn build_team_events_url(
    api_domain: &str,
    team_id: u64,
    selector: Selector,
    page: u32,
) -> String {
    let base = api_domain.trim_end_matches('/');
    format!("{base}/team/{team_id}/events/{selector}/{page}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_team_events_url_last() {
        let url = build_team_events_url("https://www.sofascore.com/api/v1", 3514, Selector::Last, 3);
        assert_eq!(url, "https://www.sofascore.com/api/v1/team/3514/events/last/3");
    }

    #[test]
    fn test_build_team_events_url_trailing_slash() {
        let url = build_team_events_url("http://localhost:8080/", 1, Selector::Next, 0);
        assert_eq!(url, "http://localhost:8080/team/1/events/next/0");
    }
}
