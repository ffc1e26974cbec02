use tracing::info;

use satgrab_application::{
    conversion::command::ConversionCommand, infrastructure_config::Config,
};

pub fn print_run_info(config: &Config, command: &ConversionCommand) {
    info!("Source image: {}", command.source_url);
    info!("Output file: {}", command.output_path.display());
    match command.target_size {
        Some(target) => info!("Target size: {target}"),
        None => info!("Target size: original dimensions"),
    }
    info!("Scratch directory: {}", config.output.scratch_dir);
}
