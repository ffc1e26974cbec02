use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use cli::args::CliArgs;
use cli::bootstrap::state::AppState;
use cli::config_loader;
use cli::observability;
use satgrab_application::error::AppError;
use satgrab_application::ports::incoming::conversion::ConvertImageUseCase;

const DEPENDENCY_MISSING_EXIT: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();

    let config = match config_loader::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = observability::tracing::setup_logging(&config) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    info!("Starting SatGrab image fetcher");

    let state = match AppState::new(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!("Startup failed: {e}");
            return exit_code_for(&e);
        }
    };

    let command = match args.to_command(&config) {
        Ok(command) => command,
        Err(e) => {
            error!("{e}");
            return exit_code_for(&e);
        }
    };

    observability::startup_info::print_run_info(&config, &command);

    match state.conversion_service.convert_image(command).await {
        Ok(outcome) => {
            info!(
                "Converted {}x{} source to {}x{} PGM ({} bytes)",
                outcome.source_width,
                outcome.source_height,
                outcome.output_width,
                outcome.output_height,
                outcome.bytes_written
            );
            info!(
                "Success! Now run: satellite-analytics --input {}",
                outcome.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Conversion failed: {e}");
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &AppError) -> ExitCode {
    match error {
        AppError::DependencyMissing { .. } => ExitCode::from(DEPENDENCY_MISSING_EXIT),
        _ => ExitCode::FAILURE,
    }
}
