//! Device settings for the CLI.
//!
//! Values come from the config file and are overridden by command-line flags.

use annke_core::ConnectionConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Configuration file structure
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    device: Option<DeviceConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct DeviceConfig {
    host: Option<String>,
    user: Option<String>,
    password: Option<String>,
    secure: Option<bool>,
}

/// Values given on the command line
#[derive(Debug, Default)]
pub struct DeviceOverrides {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub secure: bool,
}

/// Get the path to the configuration file
fn get_config_file_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|p| p.join("annke").join("config.toml"))
}

/// Load configuration from the config file, if there is one
fn load_config_file() -> Result<Option<ConfigFile>> {
    let Some(path) = get_config_file_path() else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse config file {:?}", path))?;

    tracing::debug!("Loaded config from {:?}", path);
    Ok(Some(config))
}

fn parse_config(content: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(content)?)
}

fn merge(file: Option<ConfigFile>, overrides: DeviceOverrides) -> ConnectionConfig {
    let device = file.and_then(|f| f.device).unwrap_or_default();

    ConnectionConfig::new(
        overrides.host.or(device.host).unwrap_or_default(),
        overrides.user.or(device.user).unwrap_or_default(),
        overrides.password.or(device.password).unwrap_or_default(),
        overrides.secure || device.secure.unwrap_or(false),
    )
}

/// Resolve connection settings: flags first, then the config file.
///
/// Missing host or user are left empty so the connector reports them.
pub fn load_connection_config(overrides: DeviceOverrides) -> Result<ConnectionConfig> {
    Ok(merge(load_config_file()?, overrides))
}

/// Get the path to the config file for documentation purposes
pub fn get_config_file_path_string() -> String {
    get_config_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.config/annke/config.toml".to_string())
}

/// Generate example config file content
pub fn generate_example_config() -> String {
    r#"# Annke CLI Configuration
# Place this file at: ~/.config/annke/config.toml

[device]
host = "192.168.1.64"
user = "admin"
# password = "..."

# Use https instead of http
# secure = false
"#
    .to_string()
}
