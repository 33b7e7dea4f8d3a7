#![forbid(unsafe_code)]

//! Blocks and their identifiers.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::geometry::CellRect;
use crate::palette::Tint;

/// Opaque identifier for a placed block.
///
/// Stable for the block's lifetime and never reused within one editor
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(NonZeroU64);

impl BlockId {
    /// Create an id from a raw value. Returns `None` for zero.
    #[must_use]
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// The raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// Monotonic allocator for [`BlockId`]s.
#[derive(Debug, Clone)]
pub struct BlockIdGen {
    next: NonZeroU64,
}

impl Default for BlockIdGen {
    fn default() -> Self {
        Self {
            next: NonZeroU64::MIN,
        }
    }
}

impl BlockIdGen {
    /// Create a generator starting at id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> BlockId {
        let id = BlockId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// One placed grid item: position, span, and visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Unique identifier.
    pub id: BlockId,
    /// Position and span in grid cells.
    pub rect: CellRect,
    /// Visual variant, assigned at creation and immutable thereafter.
    pub tint: Tint,
}

impl Block {
    /// Create a new block.
    #[must_use]
    pub const fn new(id: BlockId, rect: CellRect, tint: Tint) -> Self {
        Self { id, rect, tint }
    }
}

/// A creation template: the span a sidebar shape drags onto the grid with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Human-readable shape name.
    pub label: &'static str,
    /// Column span.
    pub w: u16,
    /// Row span.
    pub h: u16,
}

/// The canonical template catalog.
pub const TEMPLATES: [Template; 4] = [
    Template {
        label: "Square",
        w: 1,
        h: 1,
    },
    Template {
        label: "Wide",
        w: 2,
        h: 1,
    },
    Template {
        label: "Tall",
        w: 1,
        h: 2,
    },
    Template {
        label: "Large",
        w: 2,
        h: 2,
    },
];
