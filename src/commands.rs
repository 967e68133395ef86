use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::api::create_http_client_with_timeout;
use crate::error::AppError;
use crate::pipeline::{build_calendar, write_calendar};
use chrono::Utc;
use tracing::{info, warn};

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Starts from the stored config (or defaults), applies the requested changes
/// and saves the result.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_updates(&mut config, args);
    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }
}

/// Applies per-run CLI overrides (output path, page cap) to the loaded config.
pub fn apply_run_overrides(mut config: Config, args: &Args) -> Result<Config, AppError> {
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(max_pages) = args.max_pages {
        config.max_pages = max_pages;
    }
    config.validate()?;
    Ok(config)
}

/// Builds the calendar and writes it to the configured output, or prints it
/// to stdout with `--dry-run`.
pub async fn handle_generate_command(args: &Args, config: Config) -> Result<(), AppError> {
    let config = apply_run_overrides(config, args)?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    info!(
        "Building calendar for {} teams from {}",
        config.teams.len(),
        config.api_domain
    );

    let calendar = build_calendar(&client, &config, Utc::now())
        .await
        .inspect_err(|e| {
            if e.is_not_found() {
                warn!("The API has no data for one of the tracked teams, check the team ids in the config");
            }
        })?;

    if args.dry_run {
        print!("{}", calendar.to_ics_string());
    } else {
        write_calendar(&calendar, &config.output_path).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_run_overrides() {
        let args = Args {
            output: Some("public/cal.ics".to_string()),
            max_pages: Some(2),
            ..Args::default()
        };
        let config = apply_run_overrides(Config::default(), &args).unwrap();
        assert_eq!(config.output_path, "public/cal.ics");
        assert_eq!(config.max_pages, 2);
    }

    #[test]
    fn test_apply_run_overrides_rejects_zero_pages() {
        let args = Args {
            max_pages: Some(0),
            ..Args::default()
        };
        assert!(apply_run_overrides(Config::default(), &args).is_err());
    }

    #[test]
    fn test_apply_config_updates() {
        let mut config = Config {
            log_file_path: Some("/tmp/old.log".to_string()),
            ..Config::default()
        };

        let args = Args {
            new_api_domain: Some("https://api.example.com".to_string()),
            clear_log_file_path: true,
            ..Args::default()
        };
        apply_config_updates(&mut config, &args);

        assert_eq!(config.api_domain, "https://api.example.com");
        assert_eq!(config.log_file_path, None);
    }

    #[test]
    fn test_set_log_file_wins_over_clear() {
        let mut config = Config::default();
        let args = Args {
            new_log_file_path: Some("/tmp/new.log".to_string()),
            clear_log_file_path: true,
            ..Args::default()
        };
        apply_config_updates(&mut config, &args);
        assert_eq!(config.log_file_path, Some("/tmp/new.log".to_string()));
    }
}
