//! Config file discovery and parsing.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    error::{ConfigError, Result},
    schema::DashboardConfig,
};

const FILE_STEM: &str = "mediascope";
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Parse a config file, picking the format from its extension.
pub fn load_config(path: &Path) -> Result<DashboardConfig> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let config = match ext.as_str() {
        "toml" => toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
        "yaml" | "yml" => serde_yaml::from_str(&raw).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
        "json" => serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Directory searched after the working directory.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "mediascope", "mediascope")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// First existing `mediascope.{toml,yaml,yml,json}` in `dirs`, in order.
pub fn find_config_file(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .flat_map(|dir| {
            EXTENSIONS
                .iter()
                .map(move |ext| dir.join(format!("{FILE_STEM}.{ext}")))
        })
        .find(|candidate| candidate.is_file())
}

/// Load the first config file found in the working directory or the user
/// config directory. Falls back to defaults when none exists or the file
/// cannot be parsed.
pub fn discover_and_load() -> DashboardConfig {
    let mut dirs = vec![PathBuf::from(".")];
    if let Some(dir) = config_dir() {
        dirs.push(dir);
    }
    load_first(&dirs)
}

/// Load the first config file found in `dirs`, or defaults when there is
/// none or it cannot be parsed.
pub fn load_first(dirs: &[PathBuf]) -> DashboardConfig {
    let Some(path) = find_config_file(dirs) else {
        debug!("no config file found, using defaults");
        return DashboardConfig::default();
    };

    match load_config(&path) {
        Ok(config) => {
            info!(path = %path.display(), "using config file");
            config
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
            DashboardConfig::default()
        },
    }
}
