//! VPNGRID Render: chooser grid to HTML
//!
//! Takes the rows built by `vpngrid-core` and renders them through a
//! Handlebars template, by default the `ChoicesTable` markup.
//!
//! # Example
//!
//! ```ignore
//! use vpngrid_catalog::CatalogFiles;
//! use vpngrid_core::GridConfig;
//! use vpngrid_render::{render_choices, RenderSettings};
//!
//! let catalog = CatalogFiles::default().load()?;
//! let rendered = render_choices(&catalog, &GridConfig::default(), &RenderSettings::default())?;
//! println!("{}", rendered.html);
//! ```

pub mod renderer;
pub mod templates;

pub use renderer::{escape_markup, GridRenderer, RenderSettings};
pub use templates::TemplatesFile;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use vpngrid_core::{build_grid, CatalogStore, GridConfig, GridError, SkippedEntry};

/// Result of a render operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedGrid {
    /// The rendered markup
    pub html: String,
    pub columns: usize,
    pub rows: usize,
    pub tiles: usize,
    /// Catalog entries left out of the grid
    pub skipped: Vec<SkippedEntry>,
}

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Build the grid for the catalog's basic servers and render it
pub fn render_choices<C: CatalogStore>(
    catalog: C,
    config: &GridConfig,
    settings: &RenderSettings,
) -> Result<RenderedGrid, RenderError> {
    let renderer = GridRenderer::from_settings(settings.clone())?;
    let grid = build_grid(catalog, config)?;
    let html = renderer.render(&grid.rows)?;

    debug!(
        template = %settings.template,
        rows = grid.rows.len(),
        bytes = html.len(),
        "rendered choice grid"
    );

    Ok(RenderedGrid {
        html,
        columns: grid.columns,
        rows: grid.rows.len(),
        tiles: grid.tile_count(),
        skipped: grid.skipped,
    })
}
