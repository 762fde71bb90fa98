// Export our modules for use in binaries and tests
pub mod cli;
pub mod config;
pub mod headless;
pub mod loader;

pub use config::{init_app_config, AppConfig, ConfigError};
