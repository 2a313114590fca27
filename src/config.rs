use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReleaseError, Result};
use crate::matrix::BuildMatrix;

/// Complete configuration for git-release.
///
/// Every field has a default matching the unconfigured behavior, so running
/// without a config file is the common case.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub matrix: BuildMatrix,
}

/// Settings for the release workflow
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Tracked file whose content embeds the version string
    #[serde(default = "default_version_file")]
    pub version_file: String,

    /// Remote used when `--push-remote` is not given
    #[serde(default = "default_remote")]
    pub default_remote: String,
}

fn default_version_file() -> String {
    "main.go".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            version_file: default_version_file(),
            default_remote: default_remote(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitrelease.toml` in the current directory
/// 3. `.gitrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitrelease.toml").exists() {
        fs::read_to_string("./gitrelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitrelease.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseError::config(format!("cannot parse config: {}", e)))?;
    Ok(config)
}
