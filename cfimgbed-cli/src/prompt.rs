// ABOUTME: Interactive configuration form for the uploader settings
// ABOUTME: Prompts for endpoint, key, and directory with the same validation as the host form

use anyhow::{Context, Result};
use dialoguer::{Input, Password};
use std::path::Path;

use crate::config::{Config, Picbed, UploaderSettings, validate_api_key, validate_endpoint};

/// Run the three-field configuration form, pre-filled from the existing
/// settings. The endpoint and key are required; the directory may stay
/// empty.
pub fn prompt_settings(existing: &UploaderSettings) -> Result<UploaderSettings> {
    let api_endpoint: String = Input::new()
        .with_prompt("API endpoint (e.g. https://your-cf-imgbed.com)")
        .default(existing.api_endpoint.clone().unwrap_or_default())
        .show_default(existing.api_endpoint.is_some())
        .validate_with(|input: &String| validate_endpoint(input))
        .interact_text()
        .context("Failed to read API endpoint")?;

    let api_key: String = Password::new()
        .with_prompt("API key")
        .validate_with(|input: &String| validate_api_key(input))
        .interact()
        .context("Failed to read API key")?;

    let upload_directory: String = Input::new()
        .with_prompt("Upload directory (optional, e.g. wallpapers/nature)")
        .default(existing.upload_directory.clone().unwrap_or_default())
        .show_default(existing.upload_directory.is_some())
        .allow_empty(true)
        .interact_text()
        .context("Failed to read upload directory")?;

    Ok(UploaderSettings {
        api_endpoint: Some(api_endpoint),
        api_key: Some(api_key),
        upload_directory: if upload_directory.is_empty() {
            None
        } else {
            Some(upload_directory)
        },
    })
}

/// Persist settings as a TOML config file at `path`, creating parent
/// directories as needed.
pub fn write_settings(path: &Path, settings: UploaderSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let config = Config {
        picbed: Picbed { cfimgbed: settings },
    };
    let content =
        toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    Ok(())
}
