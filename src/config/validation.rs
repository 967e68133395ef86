use super::Config;
use crate::error::AppError;
use std::collections::HashSet;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty and must be a valid URL or domain name
/// - If log file path is provided, it cannot be empty and its parent must be creatable
/// - Timeout and page cap must be at least 1
/// - At least one team must be tracked, and no team may be listed twice
/// - Output path cannot be empty
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let api_domain = config.api_domain.as_str();
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // If it doesn't start with protocol, it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if config.max_pages == 0 {
        return Err(AppError::config_error("max_pages must be at least 1"));
    }

    if config.output_path.trim().is_empty() {
        return Err(AppError::config_error("Output path cannot be empty"));
    }

    if config.teams.is_empty() {
        return Err(AppError::config_error("At least one team must be tracked"));
    }

    let mut seen = HashSet::new();
    for team in &config.teams {
        if !seen.insert((team.id, team.sport)) {
            return Err(AppError::config_error(format!(
                "Team {} ({}) is listed more than once",
                team.id, team.sport
            )));
        }
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{Sport, TrackedTeam};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_api_domain_rules() {
        for (domain, ok) in [
            ("https://www.sofascore.com/api/v1", true),
            ("http://localhost:8080", true),
            ("api.example.com", true),
            ("localhost:3000", true),
            ("", false),
            ("not-a-domain", false),
        ] {
            let config = Config {
                api_domain: domain.to_string(),
                ..Config::default()
            };
            assert_eq!(validate_config(&config).is_ok(), ok, "domain {domain:?}");
        }
    }

    #[test]
    fn test_numeric_limits() {
        let config = Config {
            max_pages: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            http_timeout_seconds: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_team_rules() {
        let config = Config {
            teams: vec![],
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            teams: vec![
                TrackedTeam::new(1, Sport::Football, "⚽"),
                TrackedTeam::new(1, Sport::Football, "⚽"),
            ],
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        // Same id in a different sport is a different team
        let config = Config {
            teams: vec![
                TrackedTeam::new(1, Sport::Football, "⚽"),
                TrackedTeam::new(1, Sport::Basket, "🏀"),
            ],
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_paths_rejected() {
        let config = Config {
            output_path: "  ".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            log_file_path: Some(String::new()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_log_directory_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("calendar.log");
        let config = Config {
            log_file_path: Some(log_path.to_string_lossy().to_string()),
            ..Config::default()
        };

        assert!(validate_config(&config).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }
}
