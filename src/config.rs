use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::authorize::Credentials;
use crate::endpoints::{Endpoints, ACCOUNTS_BASE_URL, API_BASE_URL};

pub const CLIENT_ID_ENV: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "SPOTIFY_CLIENT_SECRET";

/// On-disk shape of the optional JSON config file. Every key may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    address: Option<IpAddr>,
    port: Option<u16>,
    client_id: Option<String>,
    client_secret: Option<String>,
    accounts_url: Option<String>,
    api_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub address: IpAddr,
    pub port: u16,
    client_id: Option<String>,
    client_secret: Option<String>,
    pub accounts_url: String,
    pub api_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::from(ConfigFile::default())
    }
}

impl From<ConfigFile> for AppConfig {
    fn from(file_config: ConfigFile) -> Self {
        AppConfig {
            address: file_config
                .address
                .unwrap_or(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))),
            port: file_config.port.unwrap_or(3000),
            client_id: file_config.client_id,
            client_secret: file_config.client_secret,
            accounts_url: file_config
                .accounts_url
                .unwrap_or_else(|| ACCOUNTS_BASE_URL.to_string()),
            api_url: file_config
                .api_url
                .unwrap_or_else(|| API_BASE_URL.to_string()),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        AppConfig::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let file_config: ConfigFile = serde_json::from_str(contents)?;
        Ok(AppConfig::from(file_config))
    }

    /// Values given here replace whatever the config file said.
    pub fn override_with(
        mut self,
        address: Option<IpAddr>,
        port: Option<u16>,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Self {
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if client_id.is_some() {
            self.client_id = client_id;
        }
        if client_secret.is_some() {
            self.client_secret = client_secret;
        }
        self
    }

    pub fn credentials(&self) -> Option<Credentials> {
        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Some(Credentials::new(id, secret))
            }
            _ => None,
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.accounts_url, &self.api_url)
    }
}
