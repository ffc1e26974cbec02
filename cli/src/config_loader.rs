use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};

use satgrab_application::error::{AppError, AppResult};
use satgrab_application::infrastructure_config::Config;

pub fn load_config() -> AppResult<Config> {
    let default_config = Config::default();
    let mut figment = Figment::from(Serialized::defaults(default_config));

    if Path::new("config.toml").exists() {
        figment = figment.merge(Toml::file("config.toml"));
    }

    if Path::new("config.json").exists() {
        figment = figment.merge(Json::file("config.json"));
    }

    let config: Config = figment
        .merge(Env::prefixed("SATGRAB_").split("__"))
        .extract()
        .map_err(|e| AppError::ConfigError {
            message: format!("Failed to load configuration: {e}"),
        })?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_defaults_without_any_config_files() {
        let config = load_config().unwrap();
        assert_eq!(config.output.default_target_size, 512);
        assert!(config.fetch.source_url.starts_with("https://"));
    }
}
