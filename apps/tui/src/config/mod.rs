#[allow(clippy::module_inception)]
mod config;

pub use config::{config_from_lookup, init_app_config, AppConfig, ConfigError};
