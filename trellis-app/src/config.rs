//! Persisted app configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trellis_board::GroupBy;

const CONFIG_DIR_NAME: &str = "trellis";
const CONFIG_FILE_NAME: &str = "config.json";

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_group_by() -> GroupBy {
    GroupBy::Status
}

/// App configuration: where the API lives and how each board groups by
/// default. Saved as JSON in the platform config dir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_group_by")]
    pub project_group_by: GroupBy,
    #[serde(default = "default_group_by")]
    pub task_group_by: GroupBy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            project_group_by: default_group_by(),
            task_group_by: default_group_by(),
        }
    }
}

impl AppConfig {
    /// Load config from the default location, returning default if not
    /// found or unreadable.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save config to the default location.
    pub fn save(&self) -> std::io::Result<()> {
        self.save_to(&config_file_path())
    }

    /// Save config to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }
}

/// Get the path to the app config file.
fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}
