use std::path::PathBuf;

use clap::Parser;

use domain::resample::TargetSize;
use satgrab_application::{
    conversion::command::ConversionCommand, error::AppResult, infrastructure_config::Config,
};

#[derive(Debug, Parser)]
#[command(
    name = "satgrab",
    version,
    about = "Fetch the configured satellite image and convert it to binary PGM"
)]
pub struct CliArgs {
    /// Target square side length in pixels (defaults to the configured size)
    #[arg(allow_negative_numbers = true)]
    pub target_size: Option<i64>,
}

impl CliArgs {
    pub fn to_command(&self, config: &Config) -> AppResult<ConversionCommand> {
        let side = self
            .target_size
            .unwrap_or_else(|| i64::from(config.output.default_target_size));

        Ok(ConversionCommand {
            source_url: config.source_url()?,
            output_path: PathBuf::from(&config.output.path),
            target_size: Some(TargetSize::new(side)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use domain::error::DomainError;
    use satgrab_application::error::AppError;

    use super::*;

    #[test]
    fn positional_size_is_optional() {
        let args = CliArgs::try_parse_from(["satgrab"]).unwrap();
        assert_eq!(args.target_size, None);

        let args = CliArgs::try_parse_from(["satgrab", "256"]).unwrap();
        assert_eq!(args.target_size, Some(256));
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(CliArgs::try_parse_from(["satgrab", "256", "512"]).is_err());
    }

    #[test]
    fn missing_size_falls_back_to_configured_default() {
        let args = CliArgs::try_parse_from(["satgrab"]).unwrap();
        let command = args.to_command(&Config::default()).unwrap();
        assert_eq!(command.target_size.unwrap().side(), 512);
        assert_eq!(command.output_path, PathBuf::from("real_satellite.pgm"));
    }

    #[test]
    fn non_positive_size_is_rejected() {
        for bad in ["0", "-64"] {
            let args = CliArgs::try_parse_from(["satgrab", bad]).unwrap();
            let result = args.to_command(&Config::default());
            assert!(matches!(
                result,
                Err(AppError::Domain(DomainError::InvalidTargetSize(_)))
            ));
        }
    }
}
