use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{GraphError, Result};
use crate::io::write_atomic;

/// Name of the configuration file stored inside the `.graphwalk` directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Name of the hidden directory used to store graphwalk settings.
pub const GRAPHWALK_DIR: &str = ".graphwalk";

/// Front-end settings for graphwalk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphwalkConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Separator between the two node ids of a command-line edge, as in `A-B`.
    pub edge_separator: String,
    /// Whether saved graphs are pretty-printed.
    pub pretty_json: bool,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for GraphwalkConfig {
    fn default() -> Self {
        Self {
            version: 1,
            edge_separator: "-".to_string(),
            pretty_json: true,
            log_filter: "graphwalk=warn".to_string(),
        }
    }
}

impl GraphwalkConfig {
    /// Rejects settings the rest of the crate cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.edge_separator.is_empty() {
            return Err(GraphError::Config {
                message: "edge_separator must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Returns the path to the `.graphwalk` directory within the given root.
pub fn get_graphwalk_dir(root: &Path) -> PathBuf {
    root.join(GRAPHWALK_DIR)
}

/// Returns the path to the configuration file within the `.graphwalk` directory.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_graphwalk_dir(root).join(CONFIG_FILENAME)
}

/// Loads the configuration stored under `root`.
///
/// A missing file yields the defaults, and keys absent from the file keep
/// their default values. The result is validated before it is returned.
pub fn load_config(root: &Path) -> Result<GraphwalkConfig> {
    let config_path = get_config_path(root);
    let config_error = |action: &str, detail: String| GraphError::Config {
        message: format!("failed to {action} '{}': {detail}", config_path.display()),
    };

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(GraphwalkConfig::default()),
        Err(e) => return Err(config_error("read config file", e.to_string())),
    };

    let config: GraphwalkConfig = serde_json::from_str(&contents)
        .map_err(|e| config_error("parse config file", e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Writes `config` under `root`, creating the `.graphwalk` directory if
/// needed, and returns the path of the written file.
///
/// Invalid settings are rejected before anything touches the disk.
pub fn save_config(root: &Path, config: &GraphwalkConfig) -> Result<PathBuf> {
    config.validate()?;

    let graphwalk_dir = get_graphwalk_dir(root);
    fs::create_dir_all(&graphwalk_dir).map_err(|e| GraphError::Config {
        message: format!(
            "failed to create directory '{}': {e}",
            graphwalk_dir.display()
        ),
    })?;

    let json = serde_json::to_string_pretty(config)?;
    let config_path = get_config_path(root);
    write_atomic(&config_path, json.as_bytes())?;
    Ok(config_path)
}
