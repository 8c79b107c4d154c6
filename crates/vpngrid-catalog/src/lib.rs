//! VPNGRID Catalog: loads the server and country catalogs from disk
//!
//! Two documents feed one [`InMemoryCatalog`] snapshot:
//! - the server document (display order + server records)
//! - the country document (country → flag file)
//!
//! Each may be XML or YAML; the format follows the file extension.
//!
//! # Example
//!
//! ```ignore
//! use vpngrid_catalog::CatalogFiles;
//!
//! let files = CatalogFiles::new("vpnmgmt/vpnservers.xml", "vpnmgmt/countryflags.xml");
//! let catalog = files.load()?;
//! ```

pub mod format;
pub mod xml;
pub mod yaml;

pub use format::DocumentFormat;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use vpngrid_core::{CountryRecord, GridError, InMemoryCatalog, ServerRecord};

/// Contents of a server document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerDocument {
    /// Canonical display order
    pub basic_servers: Vec<String>,
    pub servers: Vec<ServerRecord>,
}

/// Contents of a country document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryDocument {
    pub countries: Vec<CountryRecord>,
}

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid XML catalog: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("Invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

impl From<LoadError> for GridError {
    fn from(err: LoadError) -> Self {
        GridError::CatalogUnavailable(err.to_string())
    }
}

/// Default server document path
pub const DEFAULT_SERVERS_PATH: &str = "vpnmgmt/vpnservers.xml";
/// Default country document path
pub const DEFAULT_COUNTRIES_PATH: &str = "vpnmgmt/countryflags.xml";

/// Locations of the two catalog documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFiles {
    #[serde(default = "default_servers_path")]
    pub servers: String,
    #[serde(default = "default_countries_path")]
    pub countries: String,
}

fn default_servers_path() -> String {
    DEFAULT_SERVERS_PATH.to_string()
}

fn default_countries_path() -> String {
    DEFAULT_COUNTRIES_PATH.to_string()
}

impl Default for CatalogFiles {
    fn default() -> Self {
        Self {
            servers: default_servers_path(),
            countries: default_countries_path(),
        }
    }
}

impl CatalogFiles {
    pub fn new(servers: impl Into<String>, countries: impl Into<String>) -> Self {
        Self {
            servers: servers.into(),
            countries: countries.into(),
        }
    }

    /// Read both documents into one catalog snapshot
    pub fn load(&self) -> Result<InMemoryCatalog, LoadError> {
        let servers = load_servers(&self.servers)?;
        let countries = load_countries(&self.countries)?;

        info!(
            servers = servers.servers.len(),
            basic = servers.basic_servers.len(),
            countries = countries.countries.len(),
            "loaded VPN catalog"
        );

        Ok(InMemoryCatalog::from_parts(
            servers.basic_servers,
            servers.servers,
            countries.countries,
        ))
    }
}

/// Load a server document, picking the format from the extension
pub fn load_servers(path: &str) -> Result<ServerDocument, LoadError> {
    let format = DocumentFormat::from_path(path)?;
    parse_servers(&read(path)?, format)
}

/// Load a country document, picking the format from the extension
pub fn load_countries(path: &str) -> Result<CountryDocument, LoadError> {
    let format = DocumentFormat::from_path(path)?;
    parse_countries(&read(path)?, format)
}

pub fn parse_servers(text: &str, format: DocumentFormat) -> Result<ServerDocument, LoadError> {
    match format {
        DocumentFormat::Xml => xml::parse_servers(text),
        DocumentFormat::Yaml => yaml::parse_servers(text),
    }
}

pub fn parse_countries(text: &str, format: DocumentFormat) -> Result<CountryDocument, LoadError> {
    match format {
        DocumentFormat::Xml => xml::parse_countries(text),
        DocumentFormat::Yaml => yaml::parse_countries(text),
    }
}

fn read(path: &str) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })
}
