//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which remembers where the roster and results tables live and which
//! competition to show by default.
//!
//! Configuration is stored at `~/.config/boulderboard/config.json`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use boulderboard_core::CompFilter;
use serde::{Deserialize, Serialize};

/// Application name used for the config directory path
const APP_NAME: &str = "boulderboard";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub roster_source: Option<String>,
    pub results_source: Option<String>,
    pub default_comp: Option<CompFilter>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Combine a command-line value (which already includes any environment
    /// override) with this config. The command line wins.
    pub fn resolve(&self, roster: Option<String>, results: Option<String>, comp: Option<String>) -> Settings {
        Settings {
            roster_source: roster.or_else(|| self.roster_source.clone()),
            results_source: results.or_else(|| self.results_source.clone()),
            comp: comp
                .map(|c| CompFilter::parse(&c))
                .or_else(|| self.default_comp.clone())
                .unwrap_or_default(),
        }
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub roster_source: Option<String>,
    pub results_source: Option<String>,
    pub comp: CompFilter,
}

impl Settings {
    pub fn to_config(&self) -> Config {
        Config {
            roster_source: self.roster_source.clone(),
            results_source: self.results_source.clone(),
            default_comp: Some(self.comp.clone()),
        }
    }
}
