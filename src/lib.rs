//! Fixture Calendar Library
//!
//! Fetches past and upcoming fixtures of a set of teams from the SofaScore API
//! and renders them into one iCalendar document, deduplicated by a stable UID
//! and enriched with broadcaster info and a pre-match reminder.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use fixture_calendar::config::Config;
//! use fixture_calendar::data_fetcher::api::create_http_client_with_timeout;
//! use fixture_calendar::error::AppError;
//! use fixture_calendar::pipeline::{build_calendar, write_calendar};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::default();
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let calendar = build_calendar(&client, &config, Utc::now()).await?;
//!     write_calendar(&calendar, &config.output_path).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use calendar::{Calendar, CalendarEvent, CalendarHeader};
pub use config::Config;
pub use data_fetcher::models::{Sport, TrackedTeam};
pub use error::AppError;
pub use pipeline::{build_calendar, write_calendar};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
