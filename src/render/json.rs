//! JSON rendering for reconstructed tables.

use crate::error::{Error, Result};
use crate::model::ExtractedTable;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert tables to a JSON array.
pub fn to_json(tables: &[ExtractedTable], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(tables),
        JsonFormat::Compact => serde_json::to_string(tables),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TableCell, TableGeometry, TableRow};

    fn tables() -> Vec<ExtractedTable> {
        let mut geometry = TableGeometry::new();
        geometry.add_row(TableRow::new(1, vec![TableCell::header(1, "Name").colspan(2)]));
        vec![ExtractedTable::new("t1", Some(1), geometry)]
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&tables(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"tag\": \"header\""));
        assert!(json.contains("\"col_span\": 2"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&tables(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let back: Vec<ExtractedTable> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tables());
    }
}
