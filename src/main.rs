// src/main.rs
use clap::Parser;
use fixture_calendar::cli::{Args, is_config_operation};
use fixture_calendar::commands::{
    handle_config_update_command, handle_generate_command, handle_list_config_command,
};
use fixture_calendar::config::Config;
use fixture_calendar::error::AppError;
use fixture_calendar::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) = setup_logging(&args, config.log_file_path.as_ref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if let Err(e) = handle_generate_command(&args, config).await {
        tracing::error!("Calendar build failed: {e}");
        return Err(e);
    }

    Ok(())
}
