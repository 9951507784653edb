//
//  insightly-rs
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module loads and saves the client configuration from a TOML file
//! stored in the platform-specific configuration directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/insightly/config.toml`
//! - **macOS**: `~/Library/Application Support/insightly/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\insightly\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [client]
//! api_key = "8d7a3f1c-1234-4bcd-9a0b-2f3e4d5c6b7a"
//! base_url = "https://api.insight.ly"
//! api_version = "v2.2"
//! user_agent = "my-integration/1.0"
//! ```
//!
//! Every key is optional. A missing file is the same as an empty one.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use insightly::{Config, InsightlyClient};
//!
//! let config = Config::load()?;
//! let key = config.client.api_key.clone().unwrap_or_default();
//! let client = InsightlyClient::from_config(&config.client, key)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`endpoint`]: Endpoint defaults and URL normalization

mod endpoint;
mod file;

pub use endpoint::*;
pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Global configuration container.
///
/// # Examples
///
/// ```rust
/// use insightly::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.client.endpoint(), "https://api.insight.ly/v2.2");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Settings for the API client.
    #[serde(default)]
    pub client: ClientConfig,
}

/// Settings used to construct an [`InsightlyClient`](crate::InsightlyClient).
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `api_key` | `None` |
/// | `base_url` | `"https://api.insight.ly"` |
/// | `api_version` | `"v2.2"` |
/// | `user_agent` | `None` (uses `insightly-rs/<version>`) |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// API key used when none is given explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Scheme and host of the API, without the version segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Version segment appended to `base_url`. Empty means none.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Overrides the User-Agent header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            api_version: default_api_version(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Returns the endpoint requests are sent to: `<base_url>/<api_version>`.
    pub fn endpoint(&self) -> String {
        join_endpoint(&self.base_url, &self.api_version)
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not
    /// valid TOML for this schema.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }

        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "insightly")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}
