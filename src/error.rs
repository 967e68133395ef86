use thiserror::Error;

/// Everything that can abort a calendar run.
///
/// Fetch failures carry the page URL so the log shows which team and
/// direction broke the build. Per-fixture problems never show up here; they
/// are absorbed during deserialization and normalization.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Request for fixture page failed: {0}")]
    ApiFetch(#[from] reqwest::Error),

    // Non-success HTTP status on a fixture page
    #[error("Fixture page not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("Fixture page rejected ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Rate limited by the fixture API (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("Fixture API unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Fixture API failed ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    // Transport
    #[error("Timed out fetching fixture page: {url}")]
    NetworkTimeout { url: String },

    #[error("Could not connect for fixture page {url}: {message}")]
    NetworkConnection { url: String, message: String },

    // Page body that is not a readable events page
    #[error("Fixture page body is not JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("Fixture page has an unexpected shape: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("Fixture page is empty: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Could not parse config file: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Failed to write calendar to {path}: {message}")]
    OutputWrite { path: String, message: String },
}

impl AppError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// The `.ics` file (or its directory) could not be written or replaced
    pub fn output_write(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutputWrite {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// 5xx other than 502 and 503
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// 4xx other than 404 and 429, usually a blocked user agent
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// 502 and 503
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// True when the API has nothing for the requested team, which almost
    /// always means a wrong team id in the config.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::ApiNotFound { .. } | AppError::ApiNoData { .. }
        )
    }
}
