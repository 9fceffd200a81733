//! Environment Configuration
//!
//! 環境変数（`.env` から読み込まれたものを含む）からの設定読み込み

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::application::dto::post_config::PostConfig;

pub const ENV_ACCESS_TOKEN: &str = "VK_ACCESS_TOKEN";
pub const ENV_GROUP_ID: &str = "VK_GROUP_ID";
pub const ENV_API_VERSION: &str = "VK_API_VERSION";
pub const ENV_VK_API_BASE_URL: &str = "VK_API_BASE_URL";
pub const ENV_XKCD_BASE_URL: &str = "XKCD_BASE_URL";
pub const ENV_WORK_DIR: &str = "COMIC_WORK_DIR";

pub const DEFAULT_API_VERSION: &str = "5.131";
pub const DEFAULT_VK_API_BASE_URL: &str = "https://api.vk.com/method";
pub const DEFAULT_XKCD_BASE_URL: &str = "https://xkcd.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidGroupId { var: &'static str, value: String },

    #[error("{var} is not a valid URL: {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Process configuration, built once at startup and passed down explicitly.
#[derive(Clone)]
pub struct Config {
    pub access_token: String,
    pub group_id: u64,
    pub api_version: String,
    pub vk_api_base_url: Url,
    pub xkcd_base_url: Url,
    pub work_dir: PathBuf,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let access_token =
            non_empty(ENV_ACCESS_TOKEN).ok_or(ConfigError::Missing(ENV_ACCESS_TOKEN))?;

        let raw_group_id = non_empty(ENV_GROUP_ID).ok_or(ConfigError::Missing(ENV_GROUP_ID))?;
        let group_id = parse_group_id(&raw_group_id)?;

        let api_version =
            non_empty(ENV_API_VERSION).unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let vk_api_base_url = parse_url(
            ENV_VK_API_BASE_URL,
            non_empty(ENV_VK_API_BASE_URL).as_deref(),
            DEFAULT_VK_API_BASE_URL,
        )?;
        let xkcd_base_url = parse_url(
            ENV_XKCD_BASE_URL,
            non_empty(ENV_XKCD_BASE_URL).as_deref(),
            DEFAULT_XKCD_BASE_URL,
        )?;

        let work_dir = non_empty(ENV_WORK_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            access_token,
            group_id,
            api_version,
            vk_api_base_url,
            xkcd_base_url,
            work_dir,
        })
    }

    pub fn post_config(&self) -> PostConfig {
        PostConfig::new(self.group_id, self.work_dir.clone())
    }
}

// The token stays out of debug output and logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &"<redacted>")
            .field("group_id", &self.group_id)
            .field("api_version", &self.api_version)
            .field("vk_api_base_url", &self.vk_api_base_url.as_str())
            .field("xkcd_base_url", &self.xkcd_base_url.as_str())
            .field("work_dir", &self.work_dir)
            .finish()
    }
}

fn parse_group_id(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id as u64),
        _ => Err(ConfigError::InvalidGroupId {
            var: ENV_GROUP_ID,
            value: raw.to_string(),
        }),
    }
}

fn parse_url(var: &'static str, value: Option<&str>, default: &str) -> Result<Url, ConfigError> {
    let raw = value.unwrap_or(default).trim().trim_end_matches('/');
    Url::parse(raw).map_err(|_| ConfigError::InvalidUrl {
        var,
        value: raw.to_string(),
    })
}
