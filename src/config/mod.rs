use crate::constants::{self, calendar, teams};
use crate::data_fetcher::models::{Sport, TrackedTeam};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
///
/// Every field has a default, so a partial (or missing) `config.toml` still
/// yields a runnable configuration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the SofaScore API, without trailing `/team/...` segments.
    pub api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
    /// Maximum number of pages fetched per team and direction.
    pub max_pages: u32,
    /// Where the generated `.ics` file is written. Overwritten on every run.
    pub output_path: String,
    pub calendar_name: String,
    pub calendar_timezone: String,
    /// Tracked teams, in the order their fixtures appear in the calendar.
    pub teams: Vec<TrackedTeam>,
}

/// The three Fenerbahçe teams the calendar was built for
pub fn default_teams() -> Vec<TrackedTeam> {
    vec![
        TrackedTeam::new(teams::FOOTBALL_ID, Sport::Football, teams::FOOTBALL_EMOJI),
        TrackedTeam::new(teams::BASKETBALL_ID, Sport::Basket, teams::BASKETBALL_EMOJI),
        TrackedTeam::new(teams::VOLLEYBALL_ID, Sport::Volley, teams::VOLLEYBALL_EMOJI),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: constants::DEFAULT_API_DOMAIN.to_string(),
            log_file_path: None,
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
            max_pages: constants::DEFAULT_MAX_PAGES,
            output_path: constants::DEFAULT_OUTPUT_PATH.to_string(),
            calendar_name: calendar::DEFAULT_NAME.to_string(),
            calendar_timezone: calendar::DEFAULT_TIMEZONE.to_string(),
            teams: default_teams(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to built-in defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `FIXTURE_CALENDAR_API_DOMAIN` - Override API domain
    /// - `FIXTURE_CALENDAR_LOG_FILE` - Override log file path
    /// - `FIXTURE_CALENDAR_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `FIXTURE_CALENDAR_MAX_PAGES` - Override page cap (default: 10)
    /// - `FIXTURE_CALENDAR_OUTPUT` - Override output file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `FIXTURE_CALENDAR_*` environment variables on top of the current values.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var("FIXTURE_CALENDAR_API_DOMAIN") {
            self.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var("FIXTURE_CALENDAR_LOG_FILE") {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var("FIXTURE_CALENDAR_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(max_pages) = std::env::var("FIXTURE_CALENDAR_MAX_PAGES")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            self.max_pages = max_pages;
        }

        if let Ok(output_path) = std::env::var("FIXTURE_CALENDAR_OUTPUT") {
            self.output_path = output_path;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path}");
            println!("(Not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", config.api_domain);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Page Limit:");
        println!("{} pages per team and direction", config.max_pages);
        println!("────────────────────────────────────");
        println!("Calendar:");
        println!("{} ({})", config.calendar_name, config.calendar_timezone);
        println!("Output: {}", config.output_path);
        println!("────────────────────────────────────");
        println!("Teams:");
        for team in &config.teams {
            println!("{} {} #{}", team.emoji, team.sport, team.id);
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the API
    /// domain has a scheme.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let api_domain = if self.api_domain.starts_with("https://")
            || self.api_domain.starts_with("http://localhost")
        {
            self.api_domain.clone()
        } else {
            format!("https://{}", self.api_domain.trim_start_matches("http://"))
        };

        let content = toml::to_string_pretty(&Config {
            api_domain,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
