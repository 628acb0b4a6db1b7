//! Plain text rendering for reconstructed tables.

use crate::error::Result;
use crate::model::ExtractedTable;

/// Convert tables to plain text: one line per row, cells separated by tabs,
/// tables separated by a blank line.
pub fn to_text(tables: &[ExtractedTable]) -> Result<String> {
    let output = tables
        .iter()
        .map(|t| t.geometry.plain_text())
        .collect::<Vec<_>>()
        .join("\n\n");
    Ok(output)
}
