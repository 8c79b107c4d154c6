//! VPNGRID Core: catalog join and grid layout
//!
//! Turns the catalog's list of basic server names into rows of flag tiles.
//!
//! ```text
//! names → ServerResolver → tiles → GridLayout → rows → renderer
//!              ↓
//!        CatalogStore (servers, countries)
//! ```

pub mod catalog;
pub mod config;
pub mod data_model;
pub mod error;
pub mod grid;
pub mod layout;
pub mod resolver;

pub use catalog::{CatalogStore, InMemoryCatalog};
pub use config::{GridConfig, DEFAULT_COLUMNS};
pub use data_model::{CountryRecord, DisplayTile, Row, ServerRecord};
pub use error::GridError;
pub use grid::{build_grid, build_grid_for, ChoiceGrid, SkippedEntry};
pub use layout::GridLayout;
pub use resolver::{Resolution, ServerResolver};
