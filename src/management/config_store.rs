use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{config, debug, error::AwqatError, methods, types::AppConfig, utils};

/// Storage port for the user's preferences.
#[allow(async_fn_in_trait)]
pub trait ConfigStore {
    /// `Ok(None)` when nothing usable is stored, i.e. city or country is
    /// missing.
    async fn load(&self) -> Result<Option<AppConfig>, AwqatError>;

    async fn save(&self, config: &AppConfig) -> Result<(), AwqatError>;

    async fn clear(&self) -> Result<(), AwqatError>;

    async fn is_configured(&self) -> Result<bool, AwqatError> {
        Ok(self.load().await?.is_some())
    }
}

/// On-disk record. Every key is optional; missing ones fall back to defaults.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shafaq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl StoredConfig {
    pub fn into_app_config(self) -> Option<AppConfig> {
        let city = self.city?;
        let country = self.country?;

        Some(AppConfig {
            city,
            country,
            method: self.method.unwrap_or(methods::DEFAULT_METHOD_ID),
            school: self.school.unwrap_or(methods::DEFAULT_SCHOOL_ID),
            shafaq: self
                .shafaq
                .unwrap_or_else(|| methods::DEFAULT_SHAFAQ.to_string()),
            detected_lat: self.detected_lat.unwrap_or_default(),
            detected_lon: self.detected_lon.unwrap_or_default(),
            timezone: self.timezone.unwrap_or_else(utils::local_timezone),
        })
    }
}

impl From<&AppConfig> for StoredConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            city: Some(config.city.clone()),
            country: Some(config.country.clone()),
            method: Some(config.method),
            school: Some(config.school),
            shafaq: Some(config.shafaq.clone()),
            detected_lat: Some(config.detected_lat),
            detected_lon: Some(config.detected_lon),
            timezone: Some(config.timezone.clone()),
        }
    }
}

/// Keeps the preferences as pretty-printed JSON in a single file.
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new(config::config_path())
    }
}

impl ConfigStore for FileConfigStore {
    async fn load(&self) -> Result<Option<AppConfig>, AwqatError> {
        debug!("reading config from {}", self.path.display());

        let json = match async_fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AwqatError::Configuration(e.to_string())),
        };

        let stored: StoredConfig = serde_json::from_str(&json)
            .map_err(|e| AwqatError::Configuration(e.to_string()))?;
        Ok(stored.into_app_config())
    }

    async fn save(&self, config: &AppConfig) -> Result<(), AwqatError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| AwqatError::Configuration(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&StoredConfig::from(config))
            .map_err(|e| AwqatError::Configuration(e.to_string()))?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| AwqatError::Configuration(e.to_string()))
    }

    async fn clear(&self) -> Result<(), AwqatError> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AwqatError::Configuration(e.to_string())),
        }
    }
}
