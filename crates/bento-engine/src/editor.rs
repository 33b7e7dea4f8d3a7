#![forbid(unsafe_code)]

//! The editor facade: one owner for layout, history, selection, and drags.
//!
//! [`Editor`] is the only writer of the layout and history. The presentation
//! layer forwards discrete events (`pointer_down`, `pointer_move`,
//! `pointer_up`, `handle_key`) and reads state back through the accessors;
//! it never mutates anything itself.
//!
//! Commits happen exclusively on pointer-up with a valid preview, and each
//! commit pushes exactly one history snapshot. Invalid drops are silent
//! no-ops: invalidity is ordinary data (the `valid` flag on the preview),
//! not an error.
//!
//! The programmer-error paths (a drag mutator with no active session, a
//! commit whose target vanished) assert in debug builds and degrade to
//! logged no-ops in release.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use bento_core::{
    Block, BlockId, BlockIdGen, CellRect, GridConfig, GridMetrics, KeyEvent, Layout, PixelPos,
    Tint,
};

use crate::history::{History, HistoryConfig};
use crate::keymap::{EditorCommand, Keymap};
use crate::session::{DragIntent, DragKind, DragSession};

/// The live drag candidate, as the presentation layer renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPreview {
    /// Candidate geometry.
    pub rect: CellRect,
    /// Tint the block will carry if committed.
    pub tint: Tint,
    /// Whether releasing here would commit (drives the warning color).
    pub valid: bool,
}

/// The grid interaction engine.
pub struct Editor {
    grid: GridConfig,
    metrics: GridMetrics,
    layout: Arc<Layout>,
    history: History,
    selection: Option<BlockId>,
    drag: Option<DragSession>,
    keymap: Keymap,
    ids: BlockIdGen,
    rng: SmallRng,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("blocks", &self.layout.len())
            .field("selection", &self.selection)
            .field("dragging", &self.drag.is_some())
            .field("history", &self.history)
            .finish()
    }
}

impl Editor {
    /// Create an editor over an empty grid.
    #[must_use]
    pub fn new(grid: GridConfig, metrics: GridMetrics) -> Self {
        Self::with_rng(grid, metrics, SmallRng::from_os_rng())
    }

    /// Create an editor with a fixed tint seed, for deterministic tests.
    #[must_use]
    pub fn with_seed(grid: GridConfig, metrics: GridMetrics, seed: u64) -> Self {
        Self::with_rng(grid, metrics, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(grid: GridConfig, metrics: GridMetrics, rng: SmallRng) -> Self {
        let history = History::new(HistoryConfig::default());
        let layout = Arc::clone(history.current());
        Self {
            grid,
            metrics,
            layout,
            history,
            selection: None,
            drag: None,
            keymap: Keymap,
            ids: BlockIdGen::new(),
            rng,
        }
    }

    // ------------------------------------------------------------------
    // Render accessors
    // ------------------------------------------------------------------

    /// The committed layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The grid dimensions.
    #[must_use]
    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    /// The currently selected block, if any.
    #[must_use]
    pub fn selected(&self) -> Option<BlockId> {
        self.selection
    }

    /// The live drag candidate, if a drag has produced one.
    #[must_use]
    pub fn preview(&self) -> Option<DragPreview> {
        let session = self.drag.as_ref()?;
        let rect = session.preview()?;
        Some(DragPreview {
            rect,
            tint: session.tint(),
            valid: session.valid(),
        })
    }

    /// The block a MOVE/RESIZE drag is operating on, so the renderer can
    /// hide its committed position while the preview is shown.
    #[must_use]
    pub fn drag_target(&self) -> Option<BlockId> {
        self.drag.as_ref().and_then(DragSession::target)
    }

    /// True while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// True when an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True when a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Update the pixel bounds of the rendered grid (element moved or
    /// resized).
    pub fn set_metrics(&mut self, metrics: GridMetrics) {
        self.metrics = metrics;
    }

    // ------------------------------------------------------------------
    // Drag lifecycle
    // ------------------------------------------------------------------

    /// Begin a drag. A pointer-down while another drag is active is
    /// ignored; nested drags are not a thing.
    pub fn pointer_down(&mut self, intent: DragIntent, pos: PixelPos) {
        if self.drag.is_some() {
            warn!(?intent, "pointer_down during active drag ignored");
            return;
        }

        match intent {
            DragIntent::Create { w, h } => {
                let tint = Tint::ALL[self.rng.random_range(0..Tint::ALL.len())];
                self.selection = None;
                self.drag = Some(DragSession::create(pos, w, h, tint));
                trace!(w, h, "create drag started");
            }
            DragIntent::Move { id } => self.grab(DragKind::Move, id, pos),
            DragIntent::Resize { id } => self.grab(DragKind::Resize, id, pos),
        }
    }

    fn grab(&mut self, kind: DragKind, id: BlockId, pos: PixelPos) {
        let Some(block) = self.layout.get(id) else {
            debug_assert!(false, "drag started on unknown block");
            warn!(id = id.get(), "drag on unknown block ignored");
            return;
        };
        self.selection = Some(id);
        self.drag = Some(DragSession::grab(kind, id, pos, block.rect, block.tint));
        trace!(id = id.get(), ?kind, "drag started");
    }

    /// Recompute the preview for the current pointer position.
    ///
    /// Must only be called while a drag is active; events are processed in
    /// arrival order and each completes before the next.
    pub fn pointer_move(&mut self, pos: PixelPos) {
        let Some(session) = self.drag.as_mut() else {
            debug_assert!(false, "pointer_move with no active drag");
            return;
        };
        session.update(pos, &self.metrics, self.grid, &self.layout);
    }

    /// End the drag: commit the preview if it is valid, discard otherwise.
    pub fn pointer_up(&mut self) {
        let Some(session) = self.drag.take() else {
            debug_assert!(false, "pointer_up with no active drag");
            return;
        };

        let Some(rect) = session.preview() else {
            // A create drag that never moved has nothing to place.
            trace!("drag released with no candidate");
            return;
        };
        if !session.valid() {
            debug!(?rect, "invalid drop discarded");
            return;
        }

        match session.kind() {
            DragKind::Create => {
                let id = self.ids.next_id();
                let block = Block::new(id, rect, session.tint());
                let next = self.layout.add(block);
                debug!(id = id.get(), ?rect, "block created");
                self.commit(next);
            }
            DragKind::Move | DragKind::Resize => {
                let Some(id) = session.target() else {
                    debug_assert!(false, "move/resize session without target");
                    return;
                };
                let Some(existing) = self.layout.get(id) else {
                    debug_assert!(false, "drag target vanished before commit");
                    warn!(id = id.get(), "commit target missing; drop discarded");
                    return;
                };
                let block = Block::new(id, rect, existing.tint);
                let next = self.layout.replace(id, block);
                debug!(id = id.get(), ?rect, kind = ?session.kind(), "block updated");
                self.commit(next);
            }
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Step back one history snapshot. Returns false at the boundary.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.layout = snapshot;
                self.selection = None;
                debug!("undo");
                true
            }
            None => false,
        }
    }

    /// Step forward one history snapshot. Returns false at the boundary.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.layout = snapshot;
                self.selection = None;
                debug!("redo");
                true
            }
            None => false,
        }
    }

    /// Delete the selected block. No-op when nothing is selected.
    pub fn delete_selected(&mut self) -> bool {
        match self.selection {
            Some(id) => self.delete(id),
            None => false,
        }
    }

    /// Delete a block by id. Returns false for unknown ids.
    pub fn delete(&mut self, id: BlockId) -> bool {
        if self.layout.get(id).is_none() {
            return false;
        }
        let next = self.layout.remove(id);
        self.commit(next);
        if self.selection == Some(id) {
            self.selection = None;
        }
        debug!(id = id.get(), "block deleted");
        true
    }

    /// Hard reset: empty layout, history back to its initial single
    /// snapshot, selection cleared, any live drag discarded. Not undoable.
    pub fn reset(&mut self) {
        self.drag = None;
        self.selection = None;
        self.history.reset();
        self.layout = Arc::clone(self.history.current());
        debug!("editor reset");
    }

    /// Run the keyboard binding for `key`, if any. Returns true when a
    /// command fired and changed state.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match self.keymap.resolve(key) {
            Some(EditorCommand::Undo) => self.undo(),
            Some(EditorCommand::Redo) => self.redo(),
            Some(EditorCommand::DeleteSelected) => self.delete_selected(),
            None => false,
        }
    }

    fn commit(&mut self, next: Layout) {
        let snapshot = Arc::new(next);
        self.history.push(Arc::clone(&snapshot));
        self.layout = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_core::{KeyCode, Modifiers};

    // 12×12 grid at 1200×1200px: one cell is 100px.
    fn editor() -> Editor {
        Editor::with_seed(
            GridConfig::default(),
            GridMetrics::new(0.0, 0.0, 1200.0, 1200.0),
            7,
        )
    }

    fn px(x: f32, y: f32) -> PixelPos {
        PixelPos::new(x, y)
    }

    /// Create a block by dragging a template onto the given cell.
    fn place(editor: &mut Editor, w: u16, h: u16, cell_x: u16, cell_y: u16) -> BlockId {
        editor.pointer_down(DragIntent::Create { w, h }, px(-10.0, -10.0));
        editor.pointer_move(px(
            f32::from(cell_x) * 100.0 + 50.0,
            f32::from(cell_y) * 100.0 + 50.0,
        ));
        editor.pointer_up();
        editor.layout().blocks().last().expect("block placed").id
    }

    #[test]
    fn create_drag_places_a_block() {
        let mut editor = editor();
        let id = place(&mut editor, 2, 2, 0, 0);
        let block = editor.layout().get(id).unwrap();
        assert_eq!(block.rect, CellRect::new(0, 0, 2, 2));
        assert!(editor.can_undo());
        assert!(editor.selected().is_none());
    }

    #[test]
    fn create_without_movement_commits_nothing() {
        let mut editor = editor();
        editor.pointer_down(DragIntent::Create { w: 1, h: 1 }, px(-10.0, -10.0));
        editor.pointer_up();
        assert!(editor.layout().is_empty());
        assert!(!editor.can_undo());
    }

    #[test]
    fn invalid_create_is_a_silent_no_op() {
        let mut editor = editor();
        place(&mut editor, 2, 2, 0, 0);

        editor.pointer_down(DragIntent::Create { w: 1, h: 1 }, px(-10.0, -10.0));
        editor.pointer_move(px(50.0, 50.0));
        assert_eq!(editor.preview().map(|p| p.valid), Some(false));
        editor.pointer_up();

        assert_eq!(editor.layout().len(), 1);
        assert!(!editor.is_dragging());
    }

    #[test]
    fn move_commits_and_selects() {
        let mut editor = editor();
        let id = place(&mut editor, 2, 2, 0, 0);

        editor.pointer_down(DragIntent::Move { id }, px(100.0, 100.0));
        assert_eq!(editor.selected(), Some(id));
        assert_eq!(editor.drag_target(), Some(id));
        editor.pointer_move(px(400.0, 100.0));
        editor.pointer_up();

        assert_eq!(editor.layout().get(id).unwrap().rect, CellRect::new(3, 0, 2, 2));
        assert_eq!(editor.selected(), Some(id));
    }

    #[test]
    fn move_preserves_tint_and_id() {
        let mut editor = editor();
        let id = place(&mut editor, 2, 2, 0, 0);
        let tint = editor.layout().get(id).unwrap().tint;

        editor.pointer_down(DragIntent::Move { id }, px(100.0, 100.0));
        editor.pointer_move(px(400.0, 100.0));
        editor.pointer_up();

        let block = editor.layout().get(id).unwrap();
        assert_eq!(block.tint, tint);
        assert_eq!(editor.layout().len(), 1);
    }

    #[test]
    fn zero_movement_click_commits_baseline() {
        // Grabbing a block and releasing in place replays the baseline into
        // history: the snapshot count grows even though nothing moved.
        let mut editor = editor();
        let id = place(&mut editor, 2, 2, 0, 0);

        editor.pointer_down(DragIntent::Move { id }, px(100.0, 100.0));
        editor.pointer_up();

        assert_eq!(editor.layout().get(id).unwrap().rect, CellRect::new(0, 0, 2, 2));
        assert!(editor.undo());
        assert_eq!(editor.layout().get(id).unwrap().rect, CellRect::new(0, 0, 2, 2));
    }

    #[test]
    fn resize_selects_and_commits() {
        let mut editor = editor();
        let id = place(&mut editor, 1, 1, 4, 4);

        editor.pointer_down(DragIntent::Resize { id }, px(500.0, 500.0));
        assert_eq!(editor.selected(), Some(id));
        editor.pointer_move(px(700.0, 600.0));
        editor.pointer_up();

        assert_eq!(editor.layout().get(id).unwrap().rect, CellRect::new(4, 4, 3, 2));
    }

    #[test]
    fn invalid_move_leaves_layout_unchanged() {
        let mut editor = editor();
        let a = place(&mut editor, 2, 2, 0, 0);
        let b = place(&mut editor, 2, 2, 4, 0);

        editor.pointer_down(DragIntent::Move { id: a }, px(100.0, 100.0));
        editor.pointer_move(px(500.0, 100.0));
        assert_eq!(editor.preview().map(|p| p.valid), Some(false));
        editor.pointer_up();

        assert_eq!(editor.layout().get(a).unwrap().rect, CellRect::new(0, 0, 2, 2));
        assert_eq!(editor.layout().get(b).unwrap().rect, CellRect::new(4, 0, 2, 2));
    }

    #[test]
    fn pointer_down_during_drag_is_ignored() {
        let mut editor = editor();
        let id = place(&mut editor, 1, 1, 0, 0);

        editor.pointer_down(DragIntent::Move { id }, px(50.0, 50.0));
        editor.pointer_down(DragIntent::Create { w: 2, h: 2 }, px(0.0, 0.0));
        // Still the original move session.
        assert_eq!(editor.drag_target(), Some(id));
        editor.pointer_up();
    }

    #[test]
    fn undo_and_redo_clear_selection() {
        let mut editor = editor();
        let id = place(&mut editor, 1, 1, 0, 0);
        editor.pointer_down(DragIntent::Move { id }, px(50.0, 50.0));
        editor.pointer_move(px(250.0, 50.0));
        editor.pointer_up();
        assert_eq!(editor.selected(), Some(id));

        assert!(editor.undo());
        assert!(editor.selected().is_none());
        assert!(editor.redo());
        assert!(editor.selected().is_none());
    }

    #[test]
    fn delete_selected_requires_selection() {
        let mut editor = editor();
        place(&mut editor, 1, 1, 0, 0);
        assert!(!editor.delete_selected());
        assert_eq!(editor.layout().len(), 1);
    }

    #[test]
    fn delete_clears_matching_selection_and_pushes_history() {
        let mut editor = editor();
        let id = place(&mut editor, 1, 1, 0, 0);
        editor.pointer_down(DragIntent::Move { id }, px(50.0, 50.0));
        editor.pointer_up(); // select via zero-move click

        assert!(editor.delete_selected());
        assert!(editor.layout().is_empty());
        assert!(editor.selected().is_none());
        // Undo brings the block back.
        assert!(editor.undo());
        assert_eq!(editor.layout().len(), 1);
    }

    #[test]
    fn reset_is_hard_and_not_undoable() {
        let mut editor = editor();
        place(&mut editor, 1, 1, 0, 0);
        place(&mut editor, 1, 1, 3, 3);
        editor.reset();

        assert!(editor.layout().is_empty());
        assert!(!editor.can_undo());
        assert!(!editor.can_redo());
        assert!(editor.selected().is_none());
    }

    #[test]
    fn keyboard_bindings_drive_commands() {
        let mut editor = editor();
        let id = place(&mut editor, 1, 1, 0, 0);

        let undo = KeyEvent::new(KeyCode::Char('z')).with_modifiers(Modifiers::CTRL);
        assert!(editor.handle_key(&undo));
        assert!(editor.layout().is_empty());

        let redo = KeyEvent::new(KeyCode::Char('z'))
            .with_modifiers(Modifiers::CTRL.union(Modifiers::SHIFT));
        assert!(editor.handle_key(&redo));
        assert_eq!(editor.layout().len(), 1);

        // Select, then delete from the keyboard.
        editor.pointer_down(DragIntent::Move { id }, px(50.0, 50.0));
        editor.pointer_up();
        assert!(editor.handle_key(&KeyEvent::new(KeyCode::Backspace)));
        assert!(editor.layout().is_empty());
    }

    #[test]
    fn fresh_ids_are_never_reused_after_undo() {
        let mut editor = editor();
        let a = place(&mut editor, 1, 1, 0, 0);
        editor.undo();
        let b = place(&mut editor, 1, 1, 2, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn tints_come_from_the_palette() {
        let mut editor = editor();
        for i in 0..6 {
            place(&mut editor, 1, 1, i * 2, 0);
        }
        for block in editor.layout().blocks() {
            assert!(Tint::ALL.contains(&block.tint));
        }
    }
}
