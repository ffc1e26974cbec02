use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub fetch: FetchConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub source_url: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub default_target_size: u32,
    pub scratch_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig {
                // NASA Blue Marble; public domain and reliable for automated fetching.
                source_url:
                    "https://eoimages.gsfc.nasa.gov/images/imagerecords/57000/57752/land_shallow_topo_2048.jpg"
                        .to_string(),
                // Some image hosts reject requests without a browser UA.
                user_agent:
                    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/98.0.4758.102 Safari/537.36"
                        .to_string(),
            },
            output: OutputConfig {
                path: "real_satellite.pgm".to_string(),
                default_target_size: 512,
                scratch_dir: ".".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        self.source_url()?;

        if self.output.path.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "output.path must not be empty".to_string(),
            });
        }

        if self.output.default_target_size == 0 {
            return Err(AppError::ConfigError {
                message: "output.default_target_size must be at least 1".to_string(),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging.level must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn source_url(&self) -> AppResult<Url> {
        Url::parse(&self.fetch.source_url).map_err(|e| AppError::ConfigError {
            message: format!("fetch.source_url is not a valid URL: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.default_target_size, 512);
        assert_eq!(config.output.path, "real_satellite.pgm");
    }

    #[test]
    fn rejects_invalid_source_url() {
        let mut config = Config::default();
        config.fetch.source_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(AppError::ConfigError { .. })
        ));
    }

    #[test]
    fn rejects_zero_default_target_size() {
        let mut config = Config::default();
        config.output.default_target_size = 0;
        assert!(matches!(
            config.validate(),
            Err(AppError::ConfigError { .. })
        ));
    }
}
