//! Server Resolver: joins server names against the catalog
use tracing::warn;

use crate::catalog::CatalogStore;
use crate::data_model::DisplayTile;
use crate::error::GridError;

/// Query parameter carrying a non-default port
const PORT_PARAM: &str = "&port=";

/// Tiles produced by a resolve pass, plus the entries that were dropped
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub tiles: Vec<DisplayTile>,
    pub skipped: Vec<(String, GridError)>,
}

pub struct ServerResolver<C> {
    catalog: C,
}

impl<C: CatalogStore> ServerResolver<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Resolve names in order, dropping entries with missing catalog data.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Vec<DisplayTile> {
        self.resolve_with_report(names).tiles
    }

    /// Same as [`resolve`](Self::resolve) but keeps the skipped entries.
    pub fn resolve_with_report<S: AsRef<str>>(&self, names: &[S]) -> Resolution {
        let mut resolution = Resolution::default();

        for name in names {
            let name = name.as_ref();
            match self.resolve_one(name) {
                Ok(tile) => resolution.tiles.push(tile),
                Err(err) => {
                    warn!(server = name, error = %err, "skipping grid entry");
                    resolution.skipped.push((name.to_string(), err));
                }
            }
        }

        resolution
    }

    /// Join a single server name to its country.
    pub fn resolve_one(&self, name: &str) -> Result<DisplayTile, GridError> {
        let server = self
            .catalog
            .server_by_name(name)
            .ok_or_else(|| GridError::UnknownServer(name.to_string()))?;

        let port = non_empty(&server.port).map(str::to_string);

        let country = self
            .catalog
            .country_by_name(&server.country_name)
            .ok_or_else(|| GridError::UnknownCountry {
                server: server.name.clone(),
                country: server.country_name.clone(),
            })?;

        let link_query = link_query(&server.name, port.as_deref());
        let region_name = non_empty(&server.region_name).map(str::to_string);
        let region_label = region_name.as_deref().map(|r| format!("({})", r));

        Ok(DisplayTile {
            server_name: server.name,
            country_name: server.country_name,
            region_name,
            port,
            flag_file: country.flag_file,
            link_query,
            region_label,
        })
    }
}

/// Catalog fields use the empty string for "not set".
fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn link_query(server_name: &str, port: Option<&str>) -> String {
    match port {
        Some(port) => format!("{}{}{}", server_name, PORT_PARAM, port),
        None => server_name.to_string(),
    }
}
