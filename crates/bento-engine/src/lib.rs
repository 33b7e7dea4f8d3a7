#![forbid(unsafe_code)]

//! Engine: the stateful layer of BentoGrid.
//!
//! # Role in BentoGrid
//! `bento-engine` owns everything that changes over time: the linear
//! undo/redo history, the transient drag session, the selection, and the
//! committed layout. The presentation layer never mutates any of it
//! directly; it forwards pointer and keyboard events and reads the
//! accessors back for rendering.
//!
//! # Primary responsibilities
//! - **History**: snapshot stack with a cursor; push prunes the redo branch.
//! - **Drag sessions**: pointer-down → pointer-move* → pointer-up, with a
//!   live preview and validity flag recomputed on every move.
//! - **Editor**: the single entry point tying layout, history, selection,
//!   and input together.
//!
//! # Concurrency model
//! Strictly single-threaded and synchronous: every event is fully processed
//! before the next one, in arrival order. There are no suspension points and
//! no background work.

pub mod editor;
pub mod history;
pub mod keymap;
pub mod session;

pub use editor::{DragPreview, Editor};
pub use history::{History, HistoryConfig};
pub use keymap::{EditorCommand, Keymap};
pub use session::{DragIntent, DragKind, DragSession};
