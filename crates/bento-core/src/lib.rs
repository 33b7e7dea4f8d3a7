#![forbid(unsafe_code)]

//! Core: grid geometry, input vocabulary, and the block/layout model.
//!
//! # Role in BentoGrid
//! `bento-core` is the pure layer. It owns the cell-space geometry (bounds,
//! collision, pixel-to-cell snapping), the canonical input types the engine
//! consumes, and the value-semantics layout model that history snapshots are
//! made of. Nothing in this crate is stateful.
//!
//! # Primary responsibilities
//! - **Geometry**: `CellRect` with half-open intersection, grid bounds
//!   checks, and the two snapping rules (delta-round for move/resize,
//!   cell-floor for create).
//! - **Events**: `PixelPos`, `KeyEvent`, and bitflags `Modifiers`.
//! - **Model**: `Block`, `BlockId`, `Layout`, the `Tint` palette, and the
//!   creation template catalog.
//!
//! # How it fits in the system
//! The engine (`bento-engine`) drives drag sessions against these types and
//! owns all mutation; the exporter (`bento-export`) reads a `Layout` and
//! emits markup. Both treat this crate as the single source of geometric
//! truth.

pub mod block;
pub mod event;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod palette;

pub use block::{Block, BlockId, BlockIdGen, TEMPLATES, Template};
pub use event::{KeyCode, KeyEvent, Modifiers, PixelPos};
pub use geometry::{CellRect, GridMetrics, cell_at, clamp_origin, clamp_span, snap_delta};
pub use grid::GridConfig;
pub use layout::Layout;
pub use palette::Tint;
