//! Configuration loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::render::Style;
use crate::types::{GraphError, GraphPolicy, GraphResult, DEFAULT_DATA_FILE};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "WGRAPH_CONFIG";

/// Config file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "wgraph.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bulk-load file read at startup.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Clear the terminal after each menu choice.
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
    /// Edge acceptance rules.
    #[serde(default)]
    pub policy: GraphPolicy,
    /// Terminal colors.
    #[serde(default)]
    pub style: Style,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_clear_screen() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            clear_screen: default_clear_screen(),
            policy: GraphPolicy::default(),
            style: Style::default(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> GraphResult<Self> {
        toml::from_str(content).map_err(|e| GraphError::Config(format!("Failed to parse config: {e}")))
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GraphError::Io(std::io::Error::other(format!(
            "Failed to read config file {}: {e}",
            path.display()
        )))
    })?;
    AppConfig::from_toml(&content)
}

/// Resolve the config file path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. WGRAPH_CONFIG environment variable
/// 3. wgraph.toml in current directory
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(env_path));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    local.exists().then_some(local)
}

/// Load the resolved config, or defaults when no config file applies.
pub fn load_or_default(explicit: Option<&Path>) -> GraphResult<AppConfig> {
    match resolve_config_path(explicit) {
        Some(path) => load_config(&path),
        None => Ok(AppConfig::default()),
    }
}
