//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the export directory
pub const EXPORT_DIR_ENV: &str = "FORM_BUILDER_EXPORT_DIR";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Directory exported forms are written to
    pub export_dir: Option<PathBuf>,
    /// Directory of the last successful import, used to prefill the prompt
    pub last_import_dir: Option<PathBuf>,
    /// Show the configuration JSON next to the editor
    pub show_config_panel: Option<bool>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "formbuilder", "form-builder-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Export directory: environment, then config file, then the working
    /// directory
    pub fn resolved_export_dir(&self) -> PathBuf {
        Self::export_dir_from(std::env::var_os(EXPORT_DIR_ENV).map(PathBuf::from), self)
    }

    fn export_dir_from(env: Option<PathBuf>, config: &Self) -> PathBuf {
        env.or_else(|| config.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn show_config_panel(&self) -> bool {
        self.show_config_panel.unwrap_or(true)
    }
}
