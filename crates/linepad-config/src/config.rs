/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use linepad_mod_history::{HistoryConfig, MIN_HISTORY_DEPTH};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "LINEPAD_CONFIG";

/// File name used inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "linepad.json";

const DEFAULT_PROMPT: &str = "> ";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Max undo steps kept per document. `None` = unlimited.
    pub max_history_depth: Option<usize>,
    /// Print the list and undo/redo availability after each command.
    pub show_status: bool,
    /// Prompt shown before each REPL command.
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_history_depth: None,
            show_status: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `LINEPAD_CONFIG` environment variable
    /// 2. `linepad/linepad.json` in the platform config directory
    /// 3. `linepad.json` in the working directory
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map(|dir| dir.join("linepad").join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Reads and parses config from `path`, then sanitizes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut config: AppConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config.sanitize();
        Ok(config)
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match Self::load(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("{e:#}");
                    // Return defaults on error (don't overwrite broken file)
                    Self::default()
                }
            }
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!(
                    "Failed to create default config at {}: {e:#}",
                    path.display()
                );
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the disk write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config at {}", path.display()))
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        if let Some(depth) = self.max_history_depth {
            self.max_history_depth = Some(depth.max(MIN_HISTORY_DEPTH));
        }
        if self.prompt.is_empty() {
            self.prompt = DEFAULT_PROMPT.to_string();
        }
    }

    /// History settings for a new document.
    pub fn history_config(&self) -> HistoryConfig {
        match self.max_history_depth {
            Some(depth) => HistoryConfig::bounded(depth),
            None => HistoryConfig::unbounded(),
        }
    }
}
