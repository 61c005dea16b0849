use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Service address used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// base_url = "http://weather.internal:8000"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional override of the weather service address.
    pub base_url: Option<String>,
}

impl Config {
    /// The service address to talk to: the configured one, or the default.
    pub fn service_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Store a service address; a blank value clears the override.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        let url = url.into().trim().to_string();
        self.base_url = if url.is_empty() { None } else { Some(url) };
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-request", "weather-request-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_the_default_address() {
        let cfg = Config::default();
        assert_eq!(cfg.service_base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn configured_address_wins_over_the_default() {
        let mut cfg = Config::default();
        cfg.set_base_url("http://weather.internal:8000");

        assert_eq!(cfg.service_base_url(), "http://weather.internal:8000");
    }

    #[test]
    fn blank_address_clears_the_override() {
        let mut cfg = Config::default();
        cfg.set_base_url("http://weather.internal:8000");
        cfg.set_base_url("   ");

        assert_eq!(cfg.base_url, None);
        assert_eq!(cfg.service_base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn whitespace_around_a_stored_address_is_ignored() {
        let cfg = Config { base_url: Some("  http://weather.internal:8000  ".into()) };
        assert_eq!(cfg.service_base_url(), "http://weather.internal:8000");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_base_url("http://weather.internal:8000");

        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.base_url, cfg.base_url);
    }
}
