//! The `oas-client.json` project configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const DEFAULT_MODELS_DESTINATION: &str = "src/models";
const DEFAULT_CLIENTS_DESTINATION: &str = "src/clients";

/// Project configuration stored next to the generated sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OasConfig {
    /// Local path (relative to the project root) or `http(s)` URL of the schema.
    #[serde(default)]
    pub swagger_url: String,

    #[serde(default = "default_models_destination")]
    pub models_destination: String,

    #[serde(default = "default_clients_destination")]
    pub clients_destination: String,
}

fn default_models_destination() -> String {
    DEFAULT_MODELS_DESTINATION.to_string()
}

fn default_clients_destination() -> String {
    DEFAULT_CLIENTS_DESTINATION.to_string()
}

impl OasConfig {
    pub const FILE_NAME: &'static str = "oas-client.json";

    /// Configuration with default destinations.
    pub fn init(swagger_url: impl Into<String>) -> Self {
        Self {
            swagger_url: swagger_url.into(),
            models_destination: default_models_destination(),
            clients_destination: default_clients_destination(),
        }
    }

    pub fn with_models_destination(mut self, destination: impl Into<String>) -> Self {
        self.models_destination = destination.into();
        self
    }

    pub fn with_clients_destination(mut self, destination: impl Into<String>) -> Self {
        self.clients_destination = destination.into();
        self
    }

    /// Location of the configuration file under `root`.
    pub fn path(root: &Path) -> PathBuf {
        root.join(Self::FILE_NAME)
    }

    pub fn exists(root: &Path) -> bool {
        Self::path(root).is_file()
    }

    /// Read the configuration of the project at `root`.
    pub fn open(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Box::new(Error::NotInitialized { path: path.clone() })
            } else {
                Error::io(&path, e)
            }
        })?;

        let config: OasConfig = serde_json::from_str(&content).map_err(|e| {
            Box::new(Error::InvalidConfig {
                path: path.clone(),
                message: e.to_string(),
            })
        })?;

        if config.swagger_url.trim().is_empty() {
            return Err(Box::new(Error::InvalidConfig {
                path,
                message: "'swaggerUrl' is missing or empty".to_string(),
            }));
        }

        Ok(config)
    }

    /// Write the configuration to `root`, returning the file path.
    pub fn save(&self, root: &Path) -> Result<PathBuf> {
        let path = Self::path(root);
        let mut content = serde_json::to_string_pretty(self).map_err(|e| {
            Box::new(Error::InvalidConfig {
                path: path.clone(),
                message: e.to_string(),
            })
        })?;
        content.push('\n');
        std::fs::write(&path, content).map_err(|e| Error::io(&path, e))?;
        Ok(path)
    }

    pub fn models_dir(&self) -> &Path {
        Path::new(&self.models_destination)
    }

    pub fn clients_dir(&self) -> &Path {
        Path::new(&self.clients_destination)
    }

    /// Whether the schema locator is an `http(s)` URL.
    pub fn is_remote(&self) -> bool {
        self.swagger_url.starts_with("http://") || self.swagger_url.starts_with("https://")
    }
}
