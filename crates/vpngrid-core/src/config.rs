//! Grid Config: tunables of a render pass
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::layout::GridLayout;

/// Columns per row when nothing is configured
pub const DEFAULT_COLUMNS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

impl GridConfig {
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }

    pub fn layout(&self) -> Result<GridLayout, GridError> {
        GridLayout::new(self.columns)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
        }
    }
}
