//! Rendering result with statistics.

use crate::model::TableGeometry;
use serde::{Deserialize, Serialize};

/// Result of rendering tables, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content
    pub content: String,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ExtractionStats) -> Self {
        Self { content, stats }
    }
}

/// Statistics collected while rendering tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of tables rendered
    pub table_count: u32,

    /// Number of rows across all tables
    pub row_count: u32,

    /// Number of cells across all tables
    pub cell_count: u32,

    /// Number of header cells
    pub header_cell_count: u32,

    /// Number of cells spanning more than one row or column
    pub merged_cell_count: u32,

    /// Approximate word count of cell text
    pub word_count: u32,

    /// Character count of cell text (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one table.
    pub fn add_table(&mut self, geometry: &TableGeometry) {
        self.table_count += 1;
        self.row_count += geometry.row_count() as u32;
        for cell in geometry.cells() {
            self.cell_count += 1;
            if cell.is_header() {
                self.header_cell_count += 1;
            }
            if cell.is_merged() {
                self.merged_cell_count += 1;
            }
            self.count_text(&cell.text);
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
