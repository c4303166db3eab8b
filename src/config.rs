use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::WebdavError;
use crate::network::{ReqwestTransport, WebdavClient};

pub const CONFIG_PATH_ENV: &str = "WEBDAV_CLIENT_CONFIG";

/// Connection settings for a [`WebdavClient`] backed by `reqwest`.
///
/// ```toml
/// url = "https://dav.example.com/remote.php/webdav"
/// path = "/projects"
/// username = "alice"
/// password = "secret"
/// timeout_secs = 30
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Loads the config from [`get_config_path`]. A missing file yields the
    /// default config.
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            warn!(
                "Config file {:?} not found, using defaults",
                config_path
            );
            return Ok(Self::default());
        }
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Could not read config file: {:?}", config_path))?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Could not parse config file: {:?}", config_path))?;
        debug!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let config_str = toml::to_string(self)?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, config_str)
            .with_context(|| format!("Could not write config file: {:?}", config_path))?;
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Builds a client for the configured server.
    pub fn build_client(&self) -> crate::errors::Result<WebdavClient<ReqwestTransport>> {
        if self.url.is_empty() {
            return Err(WebdavError::Config("no server url configured".to_string()));
        }

        let mut transport = ReqwestTransport::with_timeout(self.timeout())
            .map_err(|e| WebdavError::Config(format!("could not build http client: {}", e)))?;
        if let Some(username) = &self.username {
            transport = transport.with_basic_auth(username.clone(), self.password.clone());
        }

        let mut client = WebdavClient::parse(transport, &self.url)?;
        if let Some(path) = &self.path {
            client.set_path(path.clone());
        }
        Ok(client)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
        .join("webdav-client");
    Ok(config_dir.join("config.toml"))
}
