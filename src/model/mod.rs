//! Data model for document-analysis input and reconstructed tables.
//!
//! The input side (`Block`, `AnalysisResponse`) mirrors the service's JSON
//! layout. The output side (`TableGeometry`, `ExtractedTable`) is the
//! derived row-major representation consumed by the renderers.

mod block;
mod response;
mod table;

pub use block::{Block, BlockType, EntityType, Relationship, RelationshipType};
pub use response::{AnalysisResponse, DocumentMetadata, JobStatus};
pub use table::{CellTag, ExtractedTable, TableCell, TableGeometry, TableRow};
