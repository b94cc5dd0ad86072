//! Configuration file management for mealweek.
//!
//! Provides a TOML-based config file at `~/.config/mealweek/config.toml`
//! and a resolution chain for the data file location:
//! CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use mealweek_store::StoreConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub storage: StorageSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StorageSection {
    /// Path of the meal plan JSON file.
    pub path: PathBuf,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the mealweek config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/mealweek` or
/// `~/.config/mealweek`. We intentionally ignore the platform-specific
/// `dirs::config_dir()` (which returns `~/Library/Application Support` on
/// macOS).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("mealweek");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("mealweek")
}

/// Return the path to the mealweek config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct MealweekConfig {
    pub store_config: StoreConfig,
}

impl MealweekConfig {
    /// Resolve the data file location using the chain:
    /// CLI flag > `MEALWEEK_DATA_FILE` env > config file `storage.path` >
    /// XDG default.
    pub fn resolve(cli_data_file: Option<&Path>) -> Self {
        let file_config = match load_config() {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                // Missing config is normal; an unparsable one deserves a note.
                if config_path().exists() {
                    warn!("ignoring config file: {e:#}");
                }
                None
            }
        };

        let data_file = if let Some(path) = cli_data_file {
            path.to_path_buf()
        } else if let Ok(path) = std::env::var("MEALWEEK_DATA_FILE") {
            PathBuf::from(path)
        } else if let Some(cfg) = file_config {
            cfg.storage.path
        } else {
            StoreConfig::default_data_file()
        };

        Self {
            store_config: StoreConfig::new(data_file),
        }
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
