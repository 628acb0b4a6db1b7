//! Id-keyed view over a flat block list.

use std::collections::HashMap;

use crate::model::{Block, BlockType};

/// Resolves relationship ids to blocks without copying them.
#[derive(Debug)]
pub struct BlockGraph<'a> {
    blocks: &'a [Block],
    by_id: HashMap<&'a str, usize>,
}

impl<'a> BlockGraph<'a> {
    /// Index `blocks` by id. Later duplicates win.
    pub fn new(blocks: &'a [Block]) -> Self {
        let by_id = blocks
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id.as_str(), i))
            .collect();
        Self { blocks, by_id }
    }

    /// Look up a block by id.
    pub fn get(&self, id: &str) -> Option<&'a Block> {
        self.by_id.get(id).map(|&i| &self.blocks[i])
    }

    /// TABLE blocks in response order.
    pub fn tables(&self) -> impl Iterator<Item = &'a Block> {
        let blocks = self.blocks;
        blocks.iter().filter(|b| b.block_type == BlockType::Table)
    }

    /// Children of `parent` with the given kind, in relationship order.
    ///
    /// Ids that do not resolve are logged and skipped.
    pub fn children_of(&self, parent: &Block, kind: BlockType) -> Vec<&'a Block> {
        parent
            .child_ids()
            .filter_map(|id| {
                let child = self.get(id);
                if child.is_none() {
                    log::warn!("Block {} references unknown block {}", parent.id, id);
                }
                child
            })
            .filter(|child| child.block_type == kind)
            .collect()
    }

    /// CELL children of a TABLE block.
    pub fn cells_of(&self, table: &Block) -> Vec<&'a Block> {
        self.children_of(table, BlockType::Cell)
    }
}
