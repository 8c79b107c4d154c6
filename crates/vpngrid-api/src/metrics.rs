//! Prometheus counters for grid renders, served at `/metrics`.
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

pub struct GridMetrics {
    registry: Registry,
    pub renders: IntCounter,
    pub skipped_entries: IntCounter,
    pub catalog_failures: IntCounter,
}

impl GridMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let renders = IntCounter::new("vpngrid_renders_total", "Grids built from the catalog")?;
        let skipped_entries = IntCounter::new(
            "vpngrid_skipped_entries_total",
            "Basic servers left out for missing catalog data",
        )?;
        let catalog_failures = IntCounter::new(
            "vpngrid_catalog_failures_total",
            "Requests that could not load the catalog",
        )?;

        registry.register(Box::new(renders.clone()))?;
        registry.register(Box::new(skipped_entries.clone()))?;
        registry.register(Box::new(catalog_failures.clone()))?;

        Ok(Self {
            registry,
            renders,
            skipped_entries,
            catalog_failures,
        })
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
