//! # Settings Module
//!
//! ## Purpose
//! Holds the configuration of the finder: where the PubChem services live, how long a request
//! may take, whether synonyms are fetched and structure images opened, and how logging is set up.
//!
//! ## Architecture
//! - **FinderSettings**: Serializable configuration structure, every field has a default
//! - **SettingsManager**: loads, saves and resets the configuration file
//! - **Configuration File**: JSON (`chemfinder_config.json` in the working directory unless
//!   `--config` names another one). A missing file means defaults; a broken one is an error.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "api_base_url": "https://pubchem.ncbi.nlm.nih.gov/rest/pug",
//!   "site_base_url": "https://pubchem.ncbi.nlm.nih.gov",
//!   "image_size": "l",
//!   "timeout_secs": 30,
//!   "fetch_synonyms": true,
//!   "open_images": false,
//!   "log_level": "warn",
//!   "log_file": null
//! }
//! ```
//!
//! ## Usage
//! ```rust, ignore
//! use chemfinder::settings::SettingsManager;
//!
//! let mut manager = SettingsManager::with_config_file("chemfinder_config.json")?;
//! manager.settings_mut().timeout_secs = 10;
//! manager.save_settings()?;
//! ```

use crate::pubchem::client::DEFAULT_API_BASE;
use crate::pubchem::site::{DEFAULT_IMAGE_SIZE, DEFAULT_SITE_BASE};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "chemfinder_config.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot access configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration of the finder.
///
/// # Fields
/// * `api_base_url` - root of the PUG REST API
/// * `site_base_url` - root of the PubChem web site (images, compound pages)
/// * `image_size` - `t` parameter of the image service
/// * `timeout_secs` - per-request timeout
/// * `fetch_synonyms` - whether the common name is looked up
/// * `open_images` - hand structure image URLs to the default viewer
/// * `log_level` - terminal log level (`off`, `error`, `warn`, `info`, `debug`, `trace`)
/// * `log_file` - optional file that receives the log at `info` or finer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderSettings {
    pub api_base_url: String,
    pub site_base_url: String,
    pub image_size: String,
    pub timeout_secs: u64,
    pub fetch_synonyms: bool,
    pub open_images: bool,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for FinderSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            site_base_url: DEFAULT_SITE_BASE.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            timeout_secs: 30,
            fetch_synonyms: true,
            open_images: false,
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl FinderSettings {
    /// Terminal log level, `None` for an unknown name. Parsed before the logger exists, so the
    /// caller reports a bad name once logging is up.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        LevelFilter::from_str(self.log_level.trim()).ok()
    }
}

/// Loads and persists `FinderSettings`.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings: FinderSettings,
    config_file: PathBuf,
}

impl SettingsManager {
    /// Manager for `chemfinder_config.json` in the current directory.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    /// Manager for a custom configuration file. A file that does not exist yet gives the defaults.
    pub fn with_config_file(config_file: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let config_file = config_file.as_ref().to_path_buf();
        let settings = Self::load_settings(&config_file)?;
        Ok(Self {
            settings,
            config_file,
        })
    }

    fn load_settings(config_file: &Path) -> Result<FinderSettings, SettingsError> {
        if config_file.exists() {
            let content = fs::read_to_string(config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(FinderSettings::default())
        }
    }

    /// Writes the current settings as pretty JSON.
    pub fn save_settings(&self) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.config_file, content)?;
        Ok(())
    }

    pub fn settings(&self) -> &FinderSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut FinderSettings {
        &mut self.settings
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn into_settings(self) -> FinderSettings {
        self.settings
    }

    /// Restores the defaults and saves them.
    pub fn reset_to_defaults(&mut self) -> Result<(), SettingsError> {
        self.settings = FinderSettings::default();
        self.save_settings()
    }
}
