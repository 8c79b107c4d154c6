//! YAML catalog documents.
//!
//! ```yaml
//! basic_servers: [svA, svB]
//! servers:
//!   - name: svA
//!     country_name: Germany
//!     region_name: Frankfurt
//!     port: 1194
//! ```
//!
//! ```yaml
//! countries:
//!   - name: Germany
//!     flag_file: de.png
//! ```

use serde::Deserialize;
use vpngrid_core::{CountryRecord, ServerRecord};

use crate::{CountryDocument, LoadError, ServerDocument};

#[derive(Debug, Deserialize)]
struct ServersYaml {
    #[serde(default, alias = "basicServers")]
    basic_servers: Vec<String>,
    #[serde(default)]
    servers: Vec<ServerYaml>,
}

#[derive(Debug, Deserialize)]
struct ServerYaml {
    name: String,
    #[serde(default, alias = "countryName")]
    country_name: String,
    #[serde(default, alias = "regionName")]
    region_name: Option<String>,
    #[serde(default)]
    port: Option<PortYaml>,
}

/// Ports are often written unquoted
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PortYaml {
    Number(u64),
    Text(String),
}

impl PortYaml {
    fn into_string(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CountriesYaml {
    #[serde(default)]
    countries: Vec<CountryRecordYaml>,
}

#[derive(Debug, Deserialize)]
struct CountryRecordYaml {
    name: String,
    #[serde(alias = "flagFile")]
    flag_file: String,
}

pub fn parse_servers(text: &str) -> Result<ServerDocument, LoadError> {
    let doc: ServersYaml = serde_yaml::from_str(text)?;

    let servers = doc
        .servers
        .into_iter()
        .map(|s| ServerRecord {
            name: s.name,
            country_name: s.country_name,
            region_name: s.region_name.unwrap_or_default(),
            port: s.port.map(PortYaml::into_string).unwrap_or_default(),
        })
        .collect();

    Ok(ServerDocument {
        basic_servers: doc.basic_servers,
        servers,
    })
}

pub fn parse_countries(text: &str) -> Result<CountryDocument, LoadError> {
    let doc: CountriesYaml = serde_yaml::from_str(text)?;

    Ok(CountryDocument {
        countries: doc
            .countries
            .into_iter()
            .map(|c| CountryRecord::new(c.name, c.flag_file))
            .collect(),
    })
}
