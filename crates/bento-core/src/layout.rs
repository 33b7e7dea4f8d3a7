#![forbid(unsafe_code)]

//! The layout model: an ordered collection of blocks with value semantics.
//!
//! Every mutator returns a new `Layout` instead of editing in place, so
//! history snapshots can hold `Arc<Layout>` values without any deep-copy
//! defenses against later mutation. Iteration order is insertion order and
//! is stable; it carries no meaning beyond that.
//!
//! No validation happens here. The engine only calls these with geometry it
//! has already checked against bounds and collision.

use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockId};
use crate::geometry::CellRect;

/// The full set of blocks currently on the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    blocks: Vec<Block>,
}

impl Layout {
    /// Create an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The blocks in insertion order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Look up a block by id.
    #[must_use]
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True when no blocks are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// A new layout with `block` appended.
    #[must_use]
    pub fn add(&self, block: Block) -> Layout {
        let mut blocks = self.blocks.clone();
        blocks.push(block);
        Layout { blocks }
    }

    /// A new layout with the block matching `id` replaced wholesale.
    ///
    /// Unknown ids leave the layout unchanged.
    #[must_use]
    pub fn replace(&self, id: BlockId, block: Block) -> Layout {
        let blocks = self
            .blocks
            .iter()
            .map(|b| if b.id == id { block } else { *b })
            .collect();
        Layout { blocks }
    }

    /// A new layout without the block matching `id`.
    #[must_use]
    pub fn remove(&self, id: BlockId) -> Layout {
        let blocks = self
            .blocks
            .iter()
            .filter(|b| b.id != id)
            .copied()
            .collect();
        Layout { blocks }
    }

    /// A new, empty layout.
    #[must_use]
    pub fn clear(&self) -> Layout {
        Layout::default()
    }

    /// True when `candidate` overlaps any block other than `exclude`.
    ///
    /// `exclude` lets a block being moved or resized ignore its own
    /// committed position.
    #[must_use]
    pub fn collides(&self, candidate: CellRect, exclude: Option<BlockId>) -> bool {
        self.blocks
            .iter()
            .filter(|b| Some(b.id) != exclude)
            .any(|b| candidate.intersects(&b.rect))
    }
}
