//! XML catalog documents.
//!
//! Server document: `<basicvpnservers>` holds the display order as
//! `<servername>` entries; each `<vpnserver>` carries `servername`,
//! `countryname` and optional `regionname`/`port`. Country document: one
//! `<country>` per entry with `name` and `flagfile`. Root element names are
//! not checked.

use serde::Deserialize;
use vpngrid_core::{CountryRecord, ServerRecord};

use crate::{CountryDocument, LoadError, ServerDocument};

#[derive(Debug, Deserialize)]
struct ServersXml {
    /// Only the first block is used
    #[serde(default)]
    basicvpnservers: Vec<BasicServersXml>,
    #[serde(default)]
    vpnserver: Vec<ServerXml>,
}

#[derive(Debug, Default, Deserialize)]
struct BasicServersXml {
    #[serde(default)]
    servername: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ServerXml {
    servername: String,
    /// Missing reads as empty; the resolver then skips the entry
    #[serde(default)]
    countryname: String,
    #[serde(default)]
    regionname: Option<String>,
    #[serde(default)]
    port: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CountriesXml {
    #[serde(default)]
    country: Vec<CountryXml>,
}

#[derive(Debug, Deserialize)]
struct CountryXml {
    name: String,
    flagfile: String,
}

pub fn parse_servers(text: &str) -> Result<ServerDocument, LoadError> {
    let doc: ServersXml = quick_xml::de::from_str(text)?;

    let servers = doc
        .vpnserver
        .into_iter()
        .map(|s| ServerRecord {
            name: s.servername,
            country_name: s.countryname,
            region_name: s.regionname.unwrap_or_default(),
            port: s.port.unwrap_or_default(),
        })
        .collect();

    Ok(ServerDocument {
        basic_servers: doc
            .basicvpnservers
            .into_iter()
            .next()
            .unwrap_or_default()
            .servername,
        servers,
    })
}

pub fn parse_countries(text: &str) -> Result<CountryDocument, LoadError> {
    let doc: CountriesXml = quick_xml::de::from_str(text)?;

    Ok(CountryDocument {
        countries: doc
            .country
            .into_iter()
            .map(|c| CountryRecord::new(c.name, c.flagfile))
            .collect(),
    })
}
