use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config/client.json";
pub const DEFAULT_HOST: &str = "localhost:7070";
pub const HOST_ENV_VAR: &str = "CHAT_HOST";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// `host:port` of the chat server, without scheme.
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
        }
    }
}

impl ClientConfig {
    /// Replaces the host when an override (CLI flag or `CHAT_HOST`) is given.
    pub fn with_host_override(mut self, host: Option<String>) -> Result<Self> {
        if let Some(host) = host {
            self.host = host;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ClientError::Config("host must not be empty".to_string()));
        }
        if host.contains("://") || host.contains('/') {
            return Err(ClientError::Config(format!(
                "host `{host}` must be host:port without scheme or path"
            )));
        }
        Ok(())
    }

    pub fn nickname_url(&self) -> String {
        format!("http://{}/nickname", self.host.trim())
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.host.trim())
    }
}

pub fn load_config(path: &str) -> ClientConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<ClientConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                ClientConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            ClientConfig::default()
        }
    }
}
