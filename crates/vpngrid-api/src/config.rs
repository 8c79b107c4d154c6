//! Service configuration: YAML file plus environment overrides
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vpngrid_catalog::CatalogFiles;
use vpngrid_core::GridConfig;
use vpngrid_render::RenderSettings;

/// Points at the YAML config file
pub const CONFIG_ENV: &str = "VPNGRID_CONFIG";
/// Overrides the listen address
pub const ADDR_ENV: &str = "VPNGRID_ADDR";

const DEFAULT_ADDR: &str = "0.0.0.0:8787";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub addr: String,
    pub catalog: CatalogFiles,
    pub grid: GridConfig,
    pub render: RenderSettings,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            catalog: CatalogFiles::default(),
            grid: GridConfig::default(),
            render: RenderSettings::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ApiConfig {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Defaults, then the file named by `VPNGRID_CONFIG`, then `VPNGRID_ADDR`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::load(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var(ADDR_ENV) {
            config.addr = addr;
        }

        Ok(config)
    }
}
