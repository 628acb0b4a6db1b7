//! Analysis response parsing and table reconstruction.

mod analysis_parser;
mod graph;
mod options;
mod reconstruct;
mod word_index;

pub use analysis_parser::AnalysisParser;
pub use graph::BlockGraph;
pub use options::{ErrorMode, PageSelection, ParseOptions};
pub use reconstruct::TableReconstructor;
pub use word_index::WordIndex;
