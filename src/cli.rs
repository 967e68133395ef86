use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only reads or edits the configuration
/// and no calendar should be built.
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Fixture calendar generator
///
/// Fetches past and upcoming fixtures of the configured teams from SofaScore
/// and writes them as a single iCalendar (.ics) file, one event per match
/// with broadcaster info and a reminder 60 minutes before kick-off.
///
/// The file is rebuilt from scratch on every run; schedule it (cron, CI)
/// and publish the result to keep subscribed calendars up to date.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Write the calendar to this path instead of the configured output path.
    #[arg(short = 'o', long = "output", help_heading = "Output")]
    pub output: Option<String>,

    /// Print the calendar to stdout instead of writing a file.
    #[arg(long = "dry-run", help_heading = "Output")]
    pub dry_run: bool,

    /// Maximum number of result pages fetched per team and direction.
    #[arg(long = "max-pages", help_heading = "Output")]
    pub max_pages: Option<u32>,

    /// Update API domain in config.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_DOMAIN")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Log at debug level and always mirror logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
