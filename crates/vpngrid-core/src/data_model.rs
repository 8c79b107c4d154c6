//! Data Model: ServerRecord, CountryRecord, DisplayTile, Row
use serde::{Deserialize, Serialize};

/// A VPN endpoint as listed in the server catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    /// Server name (ex: "de-fra-01"), unique within the catalog
    pub name: String,
    /// Join key into the country catalog
    pub country_name: String,
    /// May be empty
    #[serde(default)]
    pub region_name: String,
    /// May be empty
    #[serde(default)]
    pub port: String,
}

impl ServerRecord {
    pub fn new(name: impl Into<String>, country_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country_name: country_name.into(),
            region_name: String::new(),
            port: String::new(),
        }
    }

    pub fn with_region(mut self, region_name: impl Into<String>) -> Self {
        self.region_name = region_name.into();
        self
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }
}

/// A country and its flag image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    /// File name relative to the flags directory (ex: "de.png")
    pub flag_file: String,
}

impl CountryRecord {
    pub fn new(name: impl Into<String>, flag_file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flag_file: flag_file.into(),
        }
    }
}

/// One clickable cell of the chooser grid.
///
/// Optional fields are `None` when the catalog value is empty and are left
/// out of the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTile {
    pub server_name: String,
    pub country_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    pub flag_file: String,
    /// Server name plus optional `&port=` qualifier
    pub link_query: String,
    /// Parenthesized region, ex: "(Frankfurt)"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_label: Option<String>,
}

/// A horizontal group of at most `columns` tiles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub tiles: Vec<DisplayTile>,
}

impl Row {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DisplayTile> {
        self.tiles.iter()
    }

    pub fn server_names(&self) -> Vec<&str> {
        self.tiles.iter().map(|t| t.server_name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a DisplayTile;
    type IntoIter = std::slice::Iter<'a, DisplayTile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
