//! Table types.

use serde::{Deserialize, Serialize};

/// A table reconstructed from one TABLE block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedTable {
    /// Id of the source TABLE block
    pub id: String,

    /// Page the table was found on (1-indexed)
    pub page: Option<u32>,

    /// Row-major layout of the table
    pub geometry: TableGeometry,
}

impl ExtractedTable {
    /// Create a new extracted table.
    pub fn new(id: impl Into<String>, page: Option<u32>, geometry: TableGeometry) -> Self {
        Self {
            id: id.into(),
            page,
            geometry,
        }
    }
}

/// Row-major layout of a table, ordered by row index then column index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGeometry {
    /// Rows in ascending row order
    pub rows: Vec<TableRow>,
}

impl TableGeometry {
    /// Create a new empty geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &TableCell> {
        self.rows.iter().flat_map(|r| &r.cells)
    }

    /// Check if the table has merged cells.
    pub fn has_merged_cells(&self) -> bool {
        self.cells().any(TableCell::is_merged)
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// 1-based row index in the source table
    pub index: u32,

    /// Cells in ascending column order
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(index: u32, cells: Vec<TableCell>) -> Self {
        Self { index, cells }
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A resolved table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Header or data classification
    pub tag: CellTag,

    /// 1-based column of the cell's left edge
    pub column_index: u32,

    /// Number of rows this cell spans
    pub row_span: u32,

    /// Number of columns this cell spans
    pub col_span: u32,

    /// Space-joined word text
    pub text: String,
}

impl TableCell {
    /// Create a data cell with text content.
    pub fn data(column_index: u32, text: impl Into<String>) -> Self {
        Self {
            tag: CellTag::Data,
            column_index,
            row_span: 1,
            col_span: 1,
            text: text.into(),
        }
    }

    /// Create a header cell with text content.
    pub fn header(column_index: u32, text: impl Into<String>) -> Self {
        Self {
            tag: CellTag::Header,
            ..Self::data(column_index, text)
        }
    }

    /// Set colspan and return self.
    pub fn colspan(mut self, span: u32) -> Self {
        self.col_span = span;
        self
    }

    /// Set rowspan and return self.
    pub fn rowspan(mut self, span: u32) -> Self {
        self.row_span = span;
        self
    }

    /// Whether this is a header cell.
    pub fn is_header(&self) -> bool {
        self.tag == CellTag::Header
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.col_span > 1
    }
}

/// Cell classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellTag {
    /// Column header
    Header,
    /// Ordinary data cell
    #[default]
    Data,
}

impl CellTag {
    /// HTML element name for this classification.
    pub fn html_element(self) -> &'static str {
        match self {
            CellTag::Header => "th",
            CellTag::Data => "td",
        }
    }
}
