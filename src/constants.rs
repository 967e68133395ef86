//! Application-wide constants and default configuration values
//!
//! This module centralizes the fixed values of the calendar feed so that the
//! rest of the codebase never hardcodes remote endpoints or calendar text.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Default number of result pages requested per team and selector
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Default base URL of the SofaScore API
pub const DEFAULT_API_DOMAIN: &str = "https://www.sofascore.com/api/v1";

/// Default location of the generated calendar file
pub const DEFAULT_OUTPUT_PATH: &str = "fenerbahce.ics";

/// User agent sent with every API request
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; FenerbahceCalendarBot/1.0)";

/// Name of the crate-specific config/log directory
pub const APP_DIR_NAME: &str = "fixture_calendar";

/// Default log file name
pub const LOG_FILE_NAME: &str = "fixture_calendar.log";

/// Default tracked teams as (SofaScore team id, emoji)
pub mod teams {
    pub const FOOTBALL_ID: u64 = 3052;
    pub const BASKETBALL_ID: u64 = 3514;
    pub const VOLLEYBALL_ID: u64 = 38868;

    pub const FOOTBALL_EMOJI: &str = "⚽";
    pub const BASKETBALL_EMOJI: &str = "🏀";
    pub const VOLLEYBALL_EMOJI: &str = "🏐";
}

/// Text values that end up in the calendar document
pub mod calendar {
    /// Prefix of every event UID
    pub const UID_PREFIX: &str = "sofascore";

    /// Domain suffix that makes UIDs globally unique
    pub const UID_DOMAIN: &str = "lucabalo.github.io";

    pub const PRODUCT_ID: &str = "-//Lucabalo//Fenerbahce Takvim//TR";
    pub const DEFAULT_NAME: &str = "Fenerbahçe Maç Takvimi";
    pub const DEFAULT_TIMEZONE: &str = "Europe/Istanbul";

    /// Attribution appended to every event description
    pub const SOURCE_ATTRIBUTION: &str = "Kaynak: SofaScore";

    /// Minutes before kick-off the reminder fires
    pub const REMINDER_MINUTES: u32 = 60;
    pub const REMINDER_MESSAGE: &str = "Maç başlamak üzere (60 dk kaldı).";

    /// strftime pattern for UTC date-time values
    pub const UTC_DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";
}
