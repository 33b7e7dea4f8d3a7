#![forbid(unsafe_code)]

//! Linear undo/redo over immutable layout snapshots.
//!
//! [`History`] is a cursor into an append-only sequence of `Arc<Layout>`
//! snapshots. Undo and redo only move the cursor; [`push`](History::push) is
//! the sole mutator and prunes everything after the cursor first (standard
//! linear-history semantics, not a tree).
//!
//! ```text
//! push(s1), push(s2), push(s3)
//! ┌──────────────────────────────────────┐
//! │ [empty, s1, s2, s3]                  │
//! │                 ^ cursor             │
//! └──────────────────────────────────────┘
//!
//! undo() x2
//! ┌──────────────────────────────────────┐
//! │ [empty, s1, s2, s3]                  │
//! │         ^ cursor (s2, s3 redoable)   │
//! └──────────────────────────────────────┘
//!
//! push(s4): prunes the redo branch
//! ┌──────────────────────────────────────┐
//! │ [empty, s1, s4]                      │
//! │             ^ cursor                 │
//! └──────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. The sequence is never empty; it always starts with one empty snapshot.
//! 2. `cursor < snapshots.len()` after every operation.
//! 3. The snapshot at the cursor is the currently displayed layout.
//! 4. Snapshots are immutable once pushed; undo/redo never mutate them.
//! 5. At most `max_depth` snapshots are retained; the oldest are evicted
//!    from the front and become unreachable to undo.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use bento_core::Layout;

/// Configuration for the history stack.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Maximum number of snapshots to retain. Oldest snapshots are evicted
    /// when the limit is exceeded.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

impl HistoryConfig {
    /// Create a configuration with the given depth limit.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Create an unlimited configuration (for testing).
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

/// Snapshot stack with a cursor.
pub struct History {
    /// All retained snapshots; the one at `cursor` is current.
    snapshots: VecDeque<Arc<Layout>>,
    /// Index of the currently displayed snapshot.
    cursor: usize,
    /// Depth limit.
    config: HistoryConfig,
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("len", &self.snapshots.len())
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl History {
    /// Create a history holding a single empty snapshot, cursor at 0.
    #[must_use]
    pub fn new(config: HistoryConfig) -> Self {
        let mut snapshots = VecDeque::new();
        snapshots.push_back(Arc::new(Layout::default()));
        Self {
            snapshots,
            cursor: 0,
            config,
        }
    }

    /// Push a new snapshot: prune everything after the cursor, append, and
    /// advance the cursor to the new end.
    ///
    /// Called once per committed user action, never per pointer-move.
    pub fn push(&mut self, layout: Arc<Layout>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(layout);
        self.cursor = self.snapshots.len() - 1;

        let limit = self.config.max_depth.max(1);
        while self.snapshots.len() > limit {
            self.snapshots.pop_front();
            self.cursor -= 1;
        }
    }

    /// Step the cursor back and return the snapshot there.
    ///
    /// No-op (returns `None`) at the oldest retained snapshot.
    pub fn undo(&mut self) -> Option<Arc<Layout>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(Arc::clone(&self.snapshots[self.cursor]))
    }

    /// Step the cursor forward and return the snapshot there.
    ///
    /// No-op (returns `None`) when the cursor is already at the end.
    pub fn redo(&mut self) -> Option<Arc<Layout>> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(Arc::clone(&self.snapshots[self.cursor]))
    }

    /// The currently displayed snapshot.
    #[must_use]
    pub fn current(&self) -> &Arc<Layout> {
        &self.snapshots[self.cursor]
    }

    /// True when an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// True when a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of retained snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the initial snapshot is never evicted below one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drop everything and return to the initial single-empty-snapshot
    /// state. This is a hard reset, not a history-tracked action.
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push_back(Arc::new(Layout::default()));
        self.cursor = 0;
    }
}
