//! Grid Pipeline: names → tiles → rows for one catalog snapshot
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::config::GridConfig;
use crate::data_model::Row;
use crate::error::GridError;
use crate::resolver::ServerResolver;

/// A catalog entry left out of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub server: String,
    pub reason: String,
}

/// Laid-out grid, ready for rendering
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceGrid {
    pub columns: usize,
    pub rows: Vec<Row>,
    #[serde(default)]
    pub skipped: Vec<SkippedEntry>,
}

impl ChoiceGrid {
    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the grid for the catalog's canonical server list.
pub fn build_grid<C: CatalogStore>(catalog: C, config: &GridConfig) -> Result<ChoiceGrid, GridError> {
    let names = catalog.list_basic_server_names();
    build_grid_for(catalog, &names, config)
}

/// Build the grid for an explicit list of server names.
pub fn build_grid_for<C, S>(catalog: C, names: &[S], config: &GridConfig) -> Result<ChoiceGrid, GridError>
where
    C: CatalogStore,
    S: AsRef<str>,
{
    let layout = config.layout()?;
    let start = Instant::now();

    let resolution = ServerResolver::new(catalog).resolve_with_report(names);
    let skipped = resolution
        .skipped
        .into_iter()
        .map(|(server, err)| SkippedEntry {
            server,
            reason: err.to_string(),
        })
        .collect::<Vec<_>>();

    let rows = layout.layout(resolution.tiles);

    debug!(
        requested = names.len(),
        rows = rows.len(),
        skipped = skipped.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "built choice grid"
    );

    Ok(ChoiceGrid {
        columns: layout.columns(),
        rows,
        skipped,
    })
}
