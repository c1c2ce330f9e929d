// ABOUTME: Configuration file loading, validation, and hierarchical merging for the CLI
// ABOUTME: Supports TOML config files with XDG Base Directory specification compliance

use anyhow::{Context, Result, anyhow};
use cfimgbed_sdk::UploadConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{env as env_vars, files};

static ENDPOINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+").expect("endpoint pattern is valid"));

/// CLI configuration. The uploader settings live under `[picbed.cfimgbed]`,
/// mirroring the host settings path `picBed.cfimgbed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub picbed: Picbed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Picbed {
    #[serde(default)]
    pub cfimgbed: UploaderSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UploaderSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_directory: Option<String>,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths.iter().map(|p| p.as_str()).collect::<Vec<_>>())
    }

    /// Load configuration from specific file paths, lowest precedence first
    pub fn load_from_paths(paths: &[&str]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            // Later paths override earlier ones
            if let Ok(file_config) = Self::load_from_file(path) {
                config = config.merge(file_config);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<String> {
        let mut paths = Vec::new();

        // 1. User config directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            let path = home_dir
                .join(".config")
                .join(files::CONFIG_DIR)
                .join(files::CONFIG_FILE);
            paths.push(path.to_string_lossy().to_string());
        }

        // 2. XDG config home
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            let path = PathBuf::from(config_home)
                .join(files::CONFIG_DIR)
                .join(files::CONFIG_FILE);
            paths.push(path.to_string_lossy().to_string());
        }

        // 3. Project-specific config (highest precedence)
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(
                current_dir
                    .join(files::PROJECT_CONFIG)
                    .to_string_lossy()
                    .to_string(),
            );
        }

        paths
    }

    /// Path the `configure` command writes to: XDG config home when set,
    /// otherwise `~/.config/cfimgbed/config.toml`.
    pub fn default_write_path() -> Result<PathBuf> {
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(config_home)
                .join(files::CONFIG_DIR)
                .join(files::CONFIG_FILE));
        }
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home
            .join(".config")
            .join(files::CONFIG_DIR)
            .join(files::CONFIG_FILE))
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        let base = self.picbed.cfimgbed;
        let over = other.picbed.cfimgbed;
        Config {
            picbed: Picbed {
                cfimgbed: UploaderSettings {
                    api_endpoint: over.api_endpoint.or(base.api_endpoint),
                    api_key: over.api_key.or(base.api_key),
                    upload_directory: over.upload_directory.or(base.upload_directory),
                },
            },
        }
    }

    /// Validate stored settings. Presence of endpoint and key is enforced
    /// at upload time, not here; this only rejects malformed values.
    pub fn validate(&self) -> Result<()> {
        let settings = &self.picbed.cfimgbed;

        if let Some(endpoint) = &settings.api_endpoint {
            if !ENDPOINT_RE.is_match(endpoint) {
                return Err(anyhow!(
                    "Invalid api_endpoint '{}'. Expected a URL like https://example.com",
                    endpoint
                ));
            }
        }

        if let Some(key) = &settings.api_key {
            if key.is_empty() {
                return Err(anyhow!("api_key cannot be empty"));
            }
        }

        Ok(())
    }

    pub fn settings(&self) -> &UploaderSettings {
        &self.picbed.cfimgbed
    }

    /// Resolve the adapter's raw config: stored settings with the API key
    /// overridable through the environment.
    pub fn upload_config(&self) -> UploadConfig {
        let settings = self.settings();
        UploadConfig {
            api_endpoint: settings.api_endpoint.clone(),
            api_key: std::env::var(env_vars::API_KEY)
                .ok()
                .or_else(|| settings.api_key.clone()),
            upload_directory: settings.upload_directory.clone(),
        }
    }
}

/// Validate one endpoint value the way the configuration form does.
pub fn validate_endpoint(input: &str) -> Result<(), &'static str> {
    if input.is_empty() {
        return Err("API endpoint cannot be empty");
    }
    if !ENDPOINT_RE.is_match(input) {
        return Err("Please enter a valid URL (e.g. http://localhost or https://example.com)");
    }
    Ok(())
}

/// Validate one API key value the way the configuration form does.
pub fn validate_api_key(input: &str) -> Result<(), &'static str> {
    if input.is_empty() {
        return Err("API key cannot be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings().api_endpoint.is_none());
        assert!(config.settings().api_key.is_none());
        assert!(config.settings().upload_directory.is_none());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            picbed: Picbed {
                cfimgbed: UploaderSettings {
                    api_endpoint: Some("https://base.example.com".to_string()),
                    api_key: Some("base-key".to_string()),
                    upload_directory: None,
                },
            },
        };

        let override_config = Config {
            picbed: Picbed {
                cfimgbed: UploaderSettings {
                    api_endpoint: Some("https://override.example.com".to_string()),
                    api_key: None,
                    upload_directory: Some("shots".to_string()),
                },
            },
        };

        let merged = base.merge(override_config);
        assert_eq!(
            merged.settings().api_endpoint.as_deref(),
            Some("https://override.example.com")
        );
        assert_eq!(merged.settings().api_key.as_deref(), Some("base-key"));
        assert_eq!(merged.settings().upload_directory.as_deref(), Some("shots"));
    }

    #[test]
    fn test_endpoint_validation() {
        assert!(validate_endpoint("https://example.com").is_ok());
        assert!(validate_endpoint("http://localhost").is_ok());
        assert!(validate_endpoint("").is_err());
        assert!(validate_endpoint("example.com").is_err());
        assert!(validate_endpoint("ftp://example.com").is_err());
    }

    #[test]
    fn test_api_key_validation() {
        assert!(validate_api_key("some-key").is_ok());
        assert!(validate_api_key("").is_err());
    }
}
