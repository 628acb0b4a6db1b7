//! Word lookup table.

use std::collections::HashMap;

use crate::model::{Block, BlockType};

/// Mapping from WORD block id to its recognized text.
///
/// Built once per response and only read afterwards, so a shared
/// reference can be handed to every table reconstruction.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words: HashMap<String, String>,
}

impl WordIndex {
    /// Build the index from every WORD block in `blocks`.
    ///
    /// Later duplicates of an id overwrite earlier ones. A WORD without
    /// text maps to the empty string.
    pub fn build<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> Self {
        let words = blocks
            .into_iter()
            .filter(|b| b.block_type == BlockType::Word)
            .map(|b| (b.id.clone(), b.text.clone().unwrap_or_default()))
            .collect();
        Self { words }
    }

    /// Look up the text of a word.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
