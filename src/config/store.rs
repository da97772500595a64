// src/config/store.rs

use crate::{
    config::ExternalConfig,
    constants,
    error::{AppError, AppResult},
};
use anyhow::{Context, anyhow};
use log::{debug, info};
use std::{fs, path::PathBuf};

pub(super) fn get_config_path() -> AppResult<PathBuf> {
    let path = dirs::home_dir()
        .ok_or_else(|| AppError::Other(anyhow!("cannot determine the user home directory")))?
        .join(constants::CONFIG_DIR_NAME)
        .join(constants::CONFIG_FILE_NAME);
    Ok(path)
}

pub(crate) fn load_or_create_external_config() -> AppResult<ExternalConfig> {
    let config_path = get_config_path()?;
    if config_path.is_file() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file '{}'", config_path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file '{}'", config_path.display()))
            .map_err(AppError::from)
    } else {
        info!("config file {:?} does not exist, creating defaults", config_path);
        let config = ExternalConfig::default_app_config();

        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let json_content = serde_json::to_string_pretty(&config)?;
        fs::write(&config_path, json_content)?;

        Ok(config)
    }
}

/// Resolves one setting through the precedence chain: CLI flag, then
/// environment variable, then config file. Returns the value together with
/// the name of the layer that supplied it.
pub(crate) fn resolve_setting(
    cli_value: Option<&str>,
    env_key: &str,
    file_value: Option<&str>,
) -> (Option<String>, String) {
    if let Some(value) = cli_value
        && !value.is_empty()
    {
        debug!("'{}' taken from command line", env_key);
        return (Some(value.to_string()), "command line".to_string());
    }
    if let Ok(value) = std::env::var(env_key)
        && !value.is_empty()
    {
        debug!("'{}' taken from environment", env_key);
        return (Some(value), format!("environment ({})", env_key));
    }
    if let Some(value) = file_value
        && !value.is_empty()
    {
        debug!("'{}' taken from config file", env_key);
        return (Some(value.to_string()), "config file".to_string());
    }
    (None, "unset".to_string())
}
