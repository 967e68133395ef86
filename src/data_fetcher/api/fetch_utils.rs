//! Generic HTTP fetching with status-code aware error handling

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a URL and parses the JSON body into `T`.
///
/// There is no retry or cache: every call is exactly one round trip, and any
/// transport, status or parse failure is returned to the caller.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
///
/// # Returns
/// * `Result<T, AppError>` - Parsed response data or error
#[instrument(skip(client))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::models::EventsPage;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    #[tokio::test]
    async fn test_fetch_success_sends_user_agent() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/team/1/events/next/0"))
            .and(header("user-agent", crate::constants::USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"events":[{"id":7,"startTimestamp":1700000000}]}"#,
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/team/1/events/next/0", mock_server.uri());
        let page: EventsPage = fetch(&client, &url).await.unwrap();

        assert_eq!(page.events.len(), 1);
        assert_eq!(page.events[0].id, Some(7));
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/team/1/events/last/0", mock_server.uri());
        let result = fetch::<EventsPage>(&client, &url).await;

        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_status_mapping() {
        let cases = [
            (429, "rate_limit"),
            (403, "client"),
            (500, "server"),
            (503, "unavailable"),
        ];

        for (status, kind) in cases {
            let mock_server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&mock_server)
                .await;

            let client = create_test_http_client();
            let url = format!("{}/anything", mock_server.uri());
            let error = fetch::<EventsPage>(&client, &url).await.unwrap_err();

            let matched = match kind {
                "rate_limit" => matches!(error, AppError::ApiRateLimit { .. }),
                "client" => matches!(error, AppError::ApiClientError { status: 403, .. }),
                "server" => matches!(error, AppError::ApiServerError { status: 500, .. }),
                "unavailable" => {
                    matches!(error, AppError::ApiServiceUnavailable { status: 503, .. })
                }
                _ => false,
            };
            assert!(matched, "status {status} mapped to unexpected error {error:?}");
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_and_empty_bodies() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/wrong-shape"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"events": 5}"#))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();

        let html = fetch::<EventsPage>(&client, &format!("{}/html", mock_server.uri())).await;
        assert!(matches!(html, Err(AppError::ApiMalformedJson { .. })));

        let empty = fetch::<EventsPage>(&client, &format!("{}/empty", mock_server.uri())).await;
        assert!(matches!(empty, Err(AppError::ApiNoData { .. })));

        let wrong =
            fetch::<EventsPage>(&client, &format!("{}/wrong-shape", mock_server.uri())).await;
        assert!(matches!(wrong, Err(AppError::ApiUnexpectedStructure { .. })));
    }
}
