//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("SERVER/UNKNOWN: {0}")]
    UnknownServer(String),

    #[error("COUNTRY/UNKNOWN: {country} (server {server})")]
    UnknownCountry { server: String, country: String },

    #[error("CATALOG/UNAVAILABLE: {0}")]
    CatalogUnavailable(String),

    #[error("LAYOUT/COLUMNS: column count must be at least 1, got {0}")]
    InvalidColumns(usize),
}

impl GridError {
    /// Missing cross-references are skipped; everything else aborts the render.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownServer(_) | Self::UnknownCountry { .. })
    }
}
