// src/config.rs

pub mod store;

use self::store::{load_or_create_external_config, resolve_setting};
use crate::{
    cli::Cli,
    constants::{self, env_keys},
    error::{AppError, AppResult},
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkConfig {
    pub navigation_timeout_secs: Option<u64>,
    pub element_timeout_secs: Option<u64>,
    pub throttle_ms: Option<u64>,
}

/// Shape of `~/.teachable-dl/config.json`. Created with defaults on first
/// run; every field can also come from the CLI or the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_url: Option<String>,
    #[serde(default)]
    pub network: NetworkConfig,
}

impl ExternalConfig {
    pub(crate) fn default_app_config() -> Self {
        Self {
            members_url: None,
            network: NetworkConfig {
                navigation_timeout_secs: Some(constants::DEFAULT_NAVIGATION_TIMEOUT_SECS),
                element_timeout_secs: Some(constants::DEFAULT_ELEMENT_TIMEOUT_SECS),
                throttle_ms: Some(constants::DEFAULT_THROTTLE_MS),
            },
        }
    }
}

/// Fully resolved and validated run configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub members_url: Url,
    pub course_slug: String,
    pub course_url: Url,
    pub cookies_path: PathBuf,
    pub output_path: PathBuf,
    pub navigation_timeout: Duration,
    pub element_timeout: Duration,
    pub throttle: Duration,
    pub headless: bool,
}

impl AppConfig {
    pub fn new(args: &Cli) -> AppResult<Self> {
        let external_config = load_or_create_external_config()?;

        // Pre-flight: an absent or empty course slug fails here, before any
        // browser is launched.
        let (course_slug, _) = resolve_setting(args.course.as_deref(), env_keys::COURSE, None);
        let course_slug = course_slug
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "no course slug given (use --course or the {} environment variable)",
                    env_keys::COURSE
                ))
            })?;

        let (members_url, source) = resolve_setting(
            args.members_url.as_deref(),
            env_keys::MEMBERS_URL,
            external_config.members_url.as_deref(),
        );
        let members_url = members_url.ok_or_else(|| {
            AppError::Config(format!(
                "no member-area URL given (use --members-url, the {} environment variable, or the config file)",
                env_keys::MEMBERS_URL
            ))
        })?;
        log::info!("member-area URL loaded from {}", source);
        let members_url: Url = members_url.parse().map_err(|e| {
            AppError::Config(format!("invalid member-area URL '{}': {}", members_url, e))
        })?;

        let course_url = members_url.join(&course_slug)?;

        let (cookies_path, _) = resolve_setting(
            args.cookies.as_deref().and_then(|p| p.to_str()),
            env_keys::COOKIES_PATH,
            None,
        );
        let cookies_path = cookies_path.map(PathBuf::from).ok_or_else(|| {
            AppError::Config(format!(
                "no cookie file given (use --cookies or the {} environment variable)",
                env_keys::COOKIES_PATH
            ))
        })?;

        let (output_path, _) = resolve_setting(
            args.output.as_deref().and_then(|p| p.to_str()),
            env_keys::ARIA2C_OUTPUT,
            None,
        );
        let output_path = output_path.map(PathBuf::from).ok_or_else(|| {
            AppError::Config(format!(
                "no output file given (use --output or the {} environment variable)",
                env_keys::ARIA2C_OUTPUT
            ))
        })?;

        let network = &external_config.network;
        Ok(Self {
            members_url,
            course_slug,
            course_url,
            cookies_path,
            output_path,
            navigation_timeout: Duration::from_secs(
                network
                    .navigation_timeout_secs
                    .unwrap_or(constants::DEFAULT_NAVIGATION_TIMEOUT_SECS),
            ),
            element_timeout: Duration::from_secs(
                network
                    .element_timeout_secs
                    .unwrap_or(constants::DEFAULT_ELEMENT_TIMEOUT_SECS),
            ),
            throttle: Duration::from_millis(
                args.throttle_ms
                    .or(network.throttle_ms)
                    .unwrap_or(constants::DEFAULT_THROTTLE_MS),
            ),
            headless: !args.headful,
        })
    }
}

#[cfg(feature = "testing")]
impl Default for AppConfig {
    fn default() -> Self {
        let members_url: Url = "https://members.example.com/".parse().unwrap();
        let course_url = members_url.join("courses/demo").unwrap();
        Self {
            members_url,
            course_slug: "courses/demo".to_string(),
            course_url,
            cookies_path: PathBuf::from("cookies.json"),
            output_path: PathBuf::from("aria2c_input.txt"),
            navigation_timeout: Duration::from_millis(200),
            element_timeout: Duration::from_millis(100),
            throttle: Duration::ZERO,
            headless: true,
        }
    }
}
