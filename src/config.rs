//! Runtime settings for the awqat client.
//!
//! Values come from, in order of priority:
//! 1. Environment variables
//! 2. A `.env` file in the local data directory
//! 3. Built-in defaults
//!
//! None of the settings are required; a fresh install talks to the public
//! Aladhan and ip-api endpoints and keeps its preferences in the platform
//! config directory.

use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_API_URL: &str = "https://api.aladhan.com/v1";
pub const DEFAULT_GEO_URL: &str =
    "http://ip-api.com/json/?fields=status,city,country,lat,lon,timezone";
pub const DEFAULT_GEO_TIMEOUT_SECS: u64 = 5;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives at:
/// - Linux: `~/.local/share/awqat/.env`
/// - macOS: `~/Library/Application Support/awqat/.env`
/// - Windows: `%LOCALAPPDATA%/awqat/.env`
///
/// A missing file is not an error. Variables already present in the process
/// environment win over the file.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or the
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("awqat/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

/// Base URL of the timings API, without a trailing slash.
pub fn aladhan_api_url() -> String {
    env::var("AWQAT_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Full URL of the IP geolocation lookup, including the `fields` filter.
pub fn geolocation_url() -> String {
    env::var("AWQAT_GEO_URL").unwrap_or_else(|_| DEFAULT_GEO_URL.to_string())
}

/// Upper bound on the geolocation request.
pub fn geolocation_timeout() -> Duration {
    let secs = env::var("AWQAT_GEO_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_GEO_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Where user preferences are persisted.
///
/// Defaults to `{config_dir}/awqat/config.json`.
pub fn config_path() -> PathBuf {
    if let Ok(path) = env::var("AWQAT_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("awqat/config.json");
    path
}

pub fn debug_enabled() -> bool {
    env::var("AWQAT_DEBUG").is_ok_and(|v| !v.is_empty() && v != "0")
}
