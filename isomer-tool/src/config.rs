use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::ToolError;
use crate::format::OutputFormat;

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Reject IPv4 octets outside 0..=255.
    #[serde(default)]
    pub strict_octets: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("ISOMER_CONFIG") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|p| p.join("isomer").join("config.toml"))
}

pub fn load_config_from(path: &Path) -> Result<Config, ToolError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    if !path.exists() {
        return Config::default();
    }

    load_config_from(&path).unwrap_or_else(|err| {
        warn!(path = %path.display(), %err, "ignoring config file");
        Config::default()
    })
}

/// Settings after applying command-line overrides to the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub strict_octets: bool,
    pub format: OutputFormat,
}

pub fn resolve_settings(
    config: Config,
    cli_strict: bool,
    cli_format: Option<OutputFormat>,
) -> Settings {
    Settings {
        strict_octets: cli_strict || config.strict_octets,
        format: cli_format.unwrap_or(config.format),
    }
}
