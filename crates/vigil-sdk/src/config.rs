//! Configuration loading

use crate::endpoint::Endpoint;
use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Environment variable overriding the configuration file location
pub const CONFIG_PATH_ENV: &str = "VIGIL_CONFIG_PATH";

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl EndpointsConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        info!(
            path = %path.display(),
            endpoints = config.endpoints.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Path from `VIGIL_CONFIG_PATH`, falling back to `config/config.yaml`
    pub fn default_path() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Validate every endpoint and reject duplicate keys
    pub fn validate(&self) -> Result<()> {
        let mut keys = HashSet::new();
        for endpoint in &self.endpoints {
            endpoint.validate()?;
            if !keys.insert(endpoint.key()) {
                return Err(SdkError::ConfigError(format!(
                    "duplicate endpoint: {}",
                    endpoint.display_name()
                )));
            }
        }
        Ok(())
    }
}
