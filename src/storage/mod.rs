//! Storage module for configuration.

pub mod config;

pub use config::{load_config, parse_config, save_config, AppConfig, ConfigError};
