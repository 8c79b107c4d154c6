//! Catalog Store: read-only lookups over one catalog snapshot
use std::collections::HashMap;

use crate::data_model::{CountryRecord, ServerRecord};

/// Read-only access to the server and country catalogs.
///
/// Implementations must be pure: the same name always yields the same
/// record for the lifetime of the store.
pub trait CatalogStore {
    fn server_by_name(&self, name: &str) -> Option<ServerRecord>;

    fn country_by_name(&self, name: &str) -> Option<CountryRecord>;

    /// Canonical display order of the grid
    fn list_basic_server_names(&self) -> Vec<String>;
}

impl<T: CatalogStore + ?Sized> CatalogStore for &T {
    fn server_by_name(&self, name: &str) -> Option<ServerRecord> {
        (**self).server_by_name(name)
    }

    fn country_by_name(&self, name: &str) -> Option<CountryRecord> {
        (**self).country_by_name(name)
    }

    fn list_basic_server_names(&self) -> Vec<String> {
        (**self).list_basic_server_names()
    }
}

/// Hash-indexed catalog snapshot.
///
/// Records keep document order; when a name repeats, the first record wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    basic_servers: Vec<String>,
    servers: Vec<ServerRecord>,
    countries: Vec<CountryRecord>,
    server_index: HashMap<String, usize>,
    country_index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        basic_servers: Vec<String>,
        servers: Vec<ServerRecord>,
        countries: Vec<CountryRecord>,
    ) -> Self {
        let mut catalog = Self {
            basic_servers,
            ..Self::default()
        };
        servers.into_iter().for_each(|s| catalog.push_server(s));
        countries.into_iter().for_each(|c| catalog.push_country(c));
        catalog
    }

    pub fn with_basic_servers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.basic_servers = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_server(mut self, server: ServerRecord) -> Self {
        self.push_server(server);
        self
    }

    pub fn with_country(mut self, country: CountryRecord) -> Self {
        self.push_country(country);
        self
    }

    pub fn push_server(&mut self, server: ServerRecord) {
        let position = self.servers.len();
        self.server_index
            .entry(server.name.clone())
            .or_insert(position);
        self.servers.push(server);
    }

    pub fn push_country(&mut self, country: CountryRecord) {
        let position = self.countries.len();
        self.country_index
            .entry(country.name.clone())
            .or_insert(position);
        self.countries.push(country);
    }

    pub fn servers(&self) -> &[ServerRecord] {
        &self.servers
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn basic_servers(&self) -> &[String] {
        &self.basic_servers
    }
}

impl CatalogStore for InMemoryCatalog {
    fn server_by_name(&self, name: &str) -> Option<ServerRecord> {
        self.server_index
            .get(name)
            .map(|&i| self.servers[i].clone())
    }

    fn country_by_name(&self, name: &str) -> Option<CountryRecord> {
        self.country_index
            .get(name)
            .map(|&i| self.countries[i].clone())
    }

    fn list_basic_server_names(&self) -> Vec<String> {
        self.basic_servers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hits_and_misses() {
        let catalog = InMemoryCatalog::new()
            .with_server(ServerRecord::new("svA", "Germany"))
            .with_country(CountryRecord::new("Germany", "de.png"));

        assert_eq!(catalog.server_by_name("svA").unwrap().country_name, "Germany");
        assert!(catalog.server_by_name("svB").is_none());
        assert_eq!(catalog.country_by_name("Germany").unwrap().flag_file, "de.png");
        assert!(catalog.country_by_name("germany").is_none());
    }

    #[test]
    fn test_first_record_wins() {
        let catalog = InMemoryCatalog::from_parts(
            vec![],
            vec![
                ServerRecord::new("svA", "Germany"),
                ServerRecord::new("svA", "France"),
            ],
            vec![
                CountryRecord::new("Germany", "de.png"),
                CountryRecord::new("Germany", "de-old.png"),
            ],
        );

        assert_eq!(catalog.server_by_name("svA").unwrap().country_name, "Germany");
        assert_eq!(catalog.country_by_name("Germany").unwrap().flag_file, "de.png");
        assert_eq!(catalog.servers().len(), 2);
    }

    #[test]
    fn test_basic_server_order_is_kept() {
        let catalog = InMemoryCatalog::new().with_basic_servers(["svC", "svA", "svB"]);
        assert_eq!(catalog.list_basic_server_names(), vec!["svC", "svA", "svB"]);
    }
}
