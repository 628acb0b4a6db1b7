//! Table layout reconstruction from CELL blocks.
//!
//! The service reports each cell with its top-left grid position and span
//! but no ordering guarantees. The reconstructor groups cells by row,
//! orders them by column, resolves their text through the word index and
//! classifies header cells. Span geometry is carried through as reported;
//! overlapping or out-of-range spans are not validated.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::model::{Block, CellTag, TableCell, TableGeometry, TableRow};

use super::options::ErrorMode;
use super::WordIndex;

/// Empty rows tolerated beyond the number of placed cells before the row
/// index is reported as suspect.
const SPARSE_ROW_SLACK: usize = 1024;

/// Rebuilds one table's row-major layout.
#[derive(Debug, Clone, Copy)]
pub struct TableReconstructor<'a> {
    words: &'a WordIndex,
    error_mode: ErrorMode,
}

impl<'a> TableReconstructor<'a> {
    /// Create a lenient reconstructor over a word index.
    pub fn new(words: &'a WordIndex) -> Self {
        Self {
            words,
            error_mode: ErrorMode::Lenient,
        }
    }

    /// Set error mode and return self.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Reconstruct the geometry of a table from its CELL blocks.
    ///
    /// Rows are emitted for every index from 1 to the largest observed row
    /// index, including rows with no cells. Within a row, cells keep their
    /// input order when column indices tie. Cells without a row index, or
    /// with row index 0, cannot be placed and are skipped.
    pub fn reconstruct(&self, cells: &[&Block]) -> Result<TableGeometry> {
        let mut by_row: BTreeMap<u32, Vec<&Block>> = BTreeMap::new();
        for &cell in cells {
            match cell.row_index {
                Some(0) => log::warn!("Cell {} has row index 0, skipping", cell.id),
                Some(row) => by_row.entry(row).or_default().push(cell),
                None => log::warn!("Cell {} has no row index, skipping", cell.id),
            }
        }

        let max_row = match by_row.keys().next_back() {
            Some(&max) => max,
            None => return Ok(TableGeometry::new()),
        };

        let placed: usize = by_row.values().map(Vec::len).sum();
        if max_row as usize > placed.saturating_add(SPARSE_ROW_SLACK) {
            log::warn!(
                "Row index {} is far beyond the {} placed cells, emitting mostly empty rows",
                max_row,
                placed
            );
        }

        let mut geometry = TableGeometry::new();
        for index in 1..=max_row {
            let mut row_cells = by_row.remove(&index).unwrap_or_default();
            row_cells.sort_by_key(|c| c.column_index.unwrap_or(0));

            let cells = row_cells
                .into_iter()
                .map(|c| self.resolve_cell(c))
                .collect::<Result<Vec<_>>>()?;
            geometry.add_row(TableRow::new(index, cells));
        }

        Ok(geometry)
    }

    fn resolve_cell(&self, cell: &Block) -> Result<TableCell> {
        let tag = if cell.is_column_header() {
            CellTag::Header
        } else {
            CellTag::Data
        };

        Ok(TableCell {
            tag,
            column_index: cell.column_index.unwrap_or(0),
            row_span: cell.row_span.unwrap_or(1),
            col_span: cell.column_span.unwrap_or(1),
            text: self.resolve_text(cell)?,
        })
    }

    /// Space-join the cell's word texts, skipping ids the index lacks.
    fn resolve_text(&self, cell: &Block) -> Result<String> {
        let mut words = Vec::new();
        for id in cell.child_ids() {
            match self.words.get(id) {
                Some(word) => words.push(word),
                None if self.error_mode == ErrorMode::Strict => {
                    return Err(Error::MissingWord {
                        cell_id: cell.id.clone(),
                        word_id: id.to_string(),
                    });
                }
                None => log::debug!("Cell {}: word {} not indexed, skipping", cell.id, id),
            }
        }
        Ok(words.join(" "))
    }
}
