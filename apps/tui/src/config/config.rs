use dotenv::dotenv;
use indie_sync::{Theme, DEFAULT_DATA_PATH};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub theme: Theme,
    pub debug: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown theme `{0}` (expected `light` or `dark`)")]
    InvalidTheme(String),
}

/// Loads `.env`, then reads `DATA_PATH`, `SYNC_THEME` and `DEBUG` from the environment.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();
    config_from_lookup(|key| env::var(key).ok())
}

pub fn config_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<AppConfig, ConfigError> {
    let data_path = lookup("DATA_PATH")
        .filter(|path| !path.trim().is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from);

    let theme = match lookup("SYNC_THEME") {
        Some(value) => Theme::parse(&value).ok_or(ConfigError::InvalidTheme(value))?,
        None => Theme::default(),
    };

    let debug = lookup("DEBUG").is_some_and(|value| value != "0" && !value.is_empty());

    Ok(AppConfig {
        data_path,
        theme,
        debug,
    })
}
