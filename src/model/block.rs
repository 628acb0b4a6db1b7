//! Block graph types.
//!
//! A document-analysis response is a flat list of blocks that reference
//! each other by id through relationship groups. These types mirror the
//! service's PascalCase JSON layout so a response decodes directly with
//! `serde_json`.

use serde::{Deserialize, Serialize};

/// A node in the document-analysis graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    /// Unique identifier, stable within one response
    pub id: String,

    /// Block kind
    pub block_type: BlockType,

    /// Recognized text (WORD and LINE blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// 1-based row of the cell's top-left corner (CELL blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u32>,

    /// 1-based column of the cell's top-left corner (CELL blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_index: Option<u32>,

    /// Number of rows the cell occupies (absent = 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<u32>,

    /// Number of columns the cell occupies (absent = 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_span: Option<u32>,

    /// Semantic tags attached to the block
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_types: Vec<EntityType>,

    /// Reference groups pointing at other blocks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,

    /// Recognition confidence (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,

    /// 1-indexed page the block was found on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Block {
    /// Create a bare block of the given kind.
    pub fn new(id: impl Into<String>, block_type: BlockType) -> Self {
        Self {
            id: id.into(),
            block_type,
            text: None,
            row_index: None,
            column_index: None,
            row_span: None,
            column_span: None,
            entity_types: Vec::new(),
            relationships: Vec::new(),
            confidence: None,
            page: None,
        }
    }

    /// Create a WORD block.
    pub fn word(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(id, BlockType::Word)
        }
    }

    /// Create a CELL block at the given 1-based position.
    pub fn cell(id: impl Into<String>, row: u32, column: u32) -> Self {
        Self {
            row_index: Some(row),
            column_index: Some(column),
            ..Self::new(id, BlockType::Cell)
        }
    }

    /// Create a TABLE block whose children are the given cell ids.
    pub fn table<S: Into<String>>(
        id: impl Into<String>,
        cells: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(id, BlockType::Table).with_children(cells)
    }

    /// Append a CHILD relationship group and return self.
    pub fn with_children<S: Into<String>>(mut self, ids: impl IntoIterator<Item = S>) -> Self {
        self.relationships.push(Relationship::child(ids));
        self
    }

    /// Set the row and column span and return self.
    pub fn span(mut self, rows: u32, columns: u32) -> Self {
        self.row_span = Some(rows);
        self.column_span = Some(columns);
        self
    }

    /// Add an entity tag and return self.
    pub fn tagged(mut self, entity: EntityType) -> Self {
        self.entity_types.push(entity);
        self
    }

    /// Set the page number and return self.
    pub fn on_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Check the block kind.
    pub fn is(&self, block_type: BlockType) -> bool {
        self.block_type == block_type
    }

    /// Whether the block carries the column header tag.
    pub fn is_column_header(&self) -> bool {
        self.entity_types.contains(&EntityType::ColumnHeader)
    }

    /// Ids of all CHILD relationship groups, in order.
    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.relationships
            .iter()
            .filter(|rel| rel.kind == RelationshipType::Child)
            .flat_map(|rel| rel.ids.iter().map(String::as_str))
    }
}

/// Block kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    /// Page container
    Page,
    /// Line of text
    Line,
    /// Single recognized word
    Word,
    /// Table container
    Table,
    /// Table cell
    Cell,
    /// Merged cell overlay
    MergedCell,
    /// Table title
    TableTitle,
    /// Table footer
    TableFooter,
    /// Form key or value
    KeyValueSet,
    /// Checkbox or radio button
    SelectionElement,
    /// Any block kind this crate does not model
    #[serde(other)]
    Other,
}

/// Semantic tag attached to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// Column header cell
    ColumnHeader,
    /// Cell holding a table title
    TableTitle,
    /// Cell holding a table footer
    TableFooter,
    /// Cell introducing a table section
    TableSectionTitle,
    /// Cell holding a summary (e.g. totals)
    TableSummary,
    /// Table with a regular grid
    StructuredTable,
    /// Table with an irregular grid
    SemiStructuredTable,
    /// Form key
    Key,
    /// Form value
    Value,
    /// Any tag this crate does not model
    #[serde(other)]
    Other,
}

/// A typed group of references to other blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relationship {
    /// Relationship kind
    #[serde(rename = "Type")]
    pub kind: RelationshipType,

    /// Referenced block ids, in reading order
    #[serde(default)]
    pub ids: Vec<String>,
}

impl Relationship {
    /// Create a CHILD relationship.
    pub fn child<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind: RelationshipType::Child,
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Relationship kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    /// Contained blocks
    Child,
    /// Value of a form key
    Value,
    /// Cells merged into a MERGED_CELL
    MergedCell,
    /// Title attached to a table
    TableTitle,
    /// Footer attached to a table
    TableFooter,
    /// Any relationship this crate does not model
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cell_block() {
        let json = r#"{
            "BlockType": "CELL",
            "Id": "c1",
            "RowIndex": 2,
            "ColumnIndex": 3,
            "ColumnSpan": 2,
            "EntityTypes": ["COLUMN_HEADER"],
            "Relationships": [{"Type": "CHILD", "Ids": ["w1", "w2"]}],
            "Confidence": 97.5,
            "Page": 1
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();

        assert!(block.is(BlockType::Cell));
        assert_eq!(block.row_index, Some(2));
        assert_eq!(block.column_index, Some(3));
        assert_eq!(block.column_span, Some(2));
        assert_eq!(block.row_span, None);
        assert!(block.is_column_header());
        assert_eq!(block.child_ids().collect::<Vec<_>>(), vec!["w1", "w2"]);
    }

    #[test]
    fn test_unknown_tags_decode_as_other() {
        let json = r#"{
            "BlockType": "LAYOUT_FIGURE",
            "Id": "x",
            "EntityTypes": ["SOMETHING_NEW"],
            "Relationships": [{"Type": "ANSWER", "Ids": ["y"]}]
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();

        assert_eq!(block.block_type, BlockType::Other);
        assert_eq!(block.entity_types, vec![EntityType::Other]);
        assert_eq!(block.relationships[0].kind, RelationshipType::Other);
        assert_eq!(block.child_ids().count(), 0);
    }

    #[test]
    fn test_child_ids_skip_other_relationships() {
        let mut block = Block::cell("c1", 1, 1).with_children(["w1"]);
        block.relationships.push(Relationship {
            kind: RelationshipType::MergedCell,
            ids: vec!["m1".into()],
        });
        let block = block.with_children(["w2"]);

        assert_eq!(block.child_ids().collect::<Vec<_>>(), vec!["w1", "w2"]);
    }

    #[test]
    fn test_builders() {
        let cell = Block::cell("c", 1, 2)
            .span(2, 3)
            .tagged(EntityType::ColumnHeader)
            .on_page(4);
        assert_eq!(cell.row_span, Some(2));
        assert_eq!(cell.column_span, Some(3));
        assert_eq!(cell.page, Some(4));
        assert!(cell.is_column_header());

        let word = Block::word("w", "Hello");
        assert_eq!(word.text.as_deref(), Some("Hello"));
        assert!(!word.is_column_header());
    }
}
