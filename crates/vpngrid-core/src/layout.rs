//! Grid Layout: wraps tiles into fixed-width rows
use std::num::NonZeroUsize;

use crate::config::DEFAULT_COLUMNS;
use crate::data_model::{DisplayTile, Row};
use crate::error::GridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: NonZeroUsize,
}

impl GridLayout {
    pub fn new(columns: usize) -> Result<Self, GridError> {
        NonZeroUsize::new(columns)
            .map(|columns| Self { columns })
            .ok_or(GridError::InvalidColumns(columns))
    }

    pub fn columns(&self) -> usize {
        self.columns.get()
    }

    /// Split `tiles` into rows of `columns`, keeping order.
    ///
    /// A row is closed after every `columns`-th tile unless that tile is the
    /// last one, so an exact multiple never leaves an empty trailing row.
    /// No tiles means no rows.
    pub fn layout(&self, tiles: Vec<DisplayTile>) -> Vec<Row> {
        let total = tiles.len();
        let columns = self.columns.get();
        let mut rows = Vec::with_capacity(total.div_ceil(columns));
        let mut current = Row::default();

        for (index, tile) in tiles.into_iter().enumerate() {
            let position = index + 1;
            current.tiles.push(tile);
            if position % columns == 0 && position < total {
                rows.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            rows.push(current);
        }

        rows
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: NonZeroUsize::new(DEFAULT_COLUMNS).unwrap_or(NonZeroUsize::MIN),
        }
    }
}
