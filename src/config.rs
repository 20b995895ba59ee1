//! Configuration file loading
//!
//! The config lives at `~/.config/typeahead/config.toml`. A missing file is
//! not an error; an unreadable or invalid one falls back to defaults and
//! carries a warning for the status bar.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TypeaheadError;

pub use types::{CatalogConfig, Config, DEFAULT_TARGET_PROP, SelectionConfig, SuggestionsConfig};

const CONFIG_DIR: &str = "typeahead";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus any problem met while loading it
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult::default();
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Using default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, TypeaheadError> {
    let contents = fs::read_to_string(path)?;
    parse_config_toml(&contents).map_err(|reason| TypeaheadError::InvalidConfig {
        path: path.display().to_string(),
        reason,
    })
}

pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
