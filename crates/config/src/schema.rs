//! Configuration schema for the dashboard.
//!
//! Every section is `#[serde(default)]`, so a config file only needs the keys
//! it wants to change.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub limits: Limits,
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address. Local-only by default.
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 8050,
        }
    }
}

/// Where the corpus lives on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Clean CSV loaded at startup.
    pub csv_path: PathBuf,
    /// Directory of raw JSON exports consumed by `preprocess`.
    pub raw_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("data/processed/clean_data.csv"),
            raw_dir: PathBuf::from("data/raw"),
        }
    }
}

/// Size knobs for the aggregates shown on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Keywords offered in the filter dropdown.
    pub keyword_options: usize,
    /// Locations offered in the filter dropdown.
    pub location_options: usize,
    pub top_persons: usize,
    pub top_locations: usize,
    pub word_cloud_words: usize,
    /// Labels kept on each axis of the co-occurrence heatmap.
    pub heatmap_labels: usize,
    /// Above this many location/organisation pairs the sunburst keeps only
    /// the most frequent locations.
    pub hierarchy_pair_cap: usize,
    pub hierarchy_top_locations: usize,
    /// Seed for the word cloud layout, so positions are stable across requests.
    pub word_cloud_seed: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            keyword_options: 100,
            location_options: 50,
            top_persons: 20,
            top_locations: 15,
            word_cloud_words: 50,
            heatmap_labels: 25,
            hierarchy_pair_cap: 1000,
            hierarchy_top_locations: 20,
            word_cloud_seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
