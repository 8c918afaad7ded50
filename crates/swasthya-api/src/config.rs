//! Runtime configuration from environment variables.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use swasthya_assistant::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use swasthya_facilities::overpass::DEFAULT_URL as DEFAULT_OVERPASS_URL;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Load variables from the env file at `path` into the process environment.
/// Returns `Ok(false)` when there is no such file. Unreadable or malformed
/// files are errors.
pub fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Without a key the chat endpoint answers with a canned reply.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// `None` disables live facility lookups.
    pub overpass_url: Option<String>,
    pub data_dir: PathBuf,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset,
    /// except `OVERPASS_URL`, where blank turns live lookups off.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string());
        let non_blank = |var: &str| get(var).filter(|v| !v.is_empty());

        let bind_raw = non_blank("SWASTHYA_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "SWASTHYA_BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let http_timeout = match non_blank("SWASTHYA_HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "SWASTHYA_HTTP_TIMEOUT_SECS",
                        value: raw,
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let overpass_url = match get("OVERPASS_URL") {
            Some(url) if url.is_empty() => None,
            Some(url) => Some(url),
            None => Some(DEFAULT_OVERPASS_URL.to_string()),
        };

        Ok(Self {
            bind_addr,
            gemini_api_key: non_blank("GEMINI_API_KEY"),
            gemini_model: non_blank("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: non_blank("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            overpass_url,
            data_dir: non_blank("SWASTHYA_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            http_timeout,
        })
    }
}
