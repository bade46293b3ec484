//! Dashboard configuration: schema, file discovery, validation.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    error::{ConfigError, Result},
    loader::{config_dir, discover_and_load, find_config_file, load_config, load_first},
    schema::{DashboardConfig, DataConfig, Limits, LogFormat, LoggingConfig, ServerConfig},
};
