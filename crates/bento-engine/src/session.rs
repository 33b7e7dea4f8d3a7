#![forbid(unsafe_code)]

//! Drag sessions: the transient state between pointer-down and pointer-up.
//!
//! A session exists for exactly one drag. Every pointer-move recomputes the
//! candidate geometry by the kind-specific rule and revalidates it against
//! bounds and collision; pointer-up either commits the candidate (handled by
//! the editor) or discards it. The session itself never touches the layout.
//!
//! # State machine
//!
//! ```text
//!           pointer-down(intent)
//! ┌──────┐ ───────────────────────▶ ┌────────────────┐
//! │ Idle │                          │ Dragging(kind) │◀─┐ pointer-move:
//! └──────┘ ◀─────────────────────── └────────────────┘──┘ recompute
//!           pointer-up                                     preview + valid
//!           (commit iff valid)
//! ```
//!
//! # Invariants
//!
//! 1. A session's `kind` and `baseline` never change after pointer-down.
//! 2. `preview` for CREATE is `None` until the first pointer-move; for
//!    MOVE/RESIZE it starts as the baseline (trivially valid).
//! 3. `valid` always describes the current `preview`, never a stale one.
//! 4. An invalid preview is never committed; releasing over it just drops
//!    the session.

use bento_core::{
    BlockId, CellRect, GridConfig, GridMetrics, Layout, PixelPos, Tint, cell_at, clamp_origin,
    clamp_span, snap_delta,
};

/// The pointer-down payload: what this drag intends to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragIntent {
    /// Drag a new block out of the template sidebar.
    Create {
        /// Column span of the template.
        w: u16,
        /// Row span of the template.
        h: u16,
    },
    /// Pick up an existing block to move it.
    Move {
        /// The block under the pointer.
        id: BlockId,
    },
    /// Grab an existing block's resize handle.
    Resize {
        /// The block whose handle was grabbed.
        id: BlockId,
    },
}

/// What kind of drag a session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Create,
    Move,
    Resize,
}

/// Transient drag state, created on pointer-down and discarded on
/// pointer-up regardless of outcome.
#[derive(Debug, Clone)]
pub struct DragSession {
    kind: DragKind,
    /// The block being moved/resized; `None` for CREATE.
    target: Option<BlockId>,
    /// Pointer position at drag start, in client pixels.
    anchor: PixelPos,
    /// Geometry at drag start. For CREATE this is a zero-positioned rect
    /// carrying the template span.
    baseline: CellRect,
    /// Tint the committed block will carry.
    tint: Tint,
    /// Live candidate geometry, recomputed on every pointer-move.
    preview: Option<CellRect>,
    /// Whether `preview` is in bounds and collision-free.
    valid: bool,
}

impl DragSession {
    /// Start a CREATE drag with a template span and a freshly picked tint.
    ///
    /// There is no candidate until the pointer first moves over the grid, so
    /// a press-and-release without movement commits nothing.
    #[must_use]
    pub(crate) fn create(anchor: PixelPos, w: u16, h: u16, tint: Tint) -> Self {
        Self {
            kind: DragKind::Create,
            target: None,
            anchor,
            baseline: CellRect::new(0, 0, w.max(1), h.max(1)),
            tint,
            preview: None,
            valid: true,
        }
    }

    /// Start a MOVE or RESIZE drag on an existing block.
    ///
    /// The initial preview is the block's committed geometry, which is valid
    /// by construction.
    #[must_use]
    pub(crate) fn grab(kind: DragKind, id: BlockId, anchor: PixelPos, baseline: CellRect, tint: Tint) -> Self {
        debug_assert!(kind != DragKind::Create, "grab is for existing blocks");
        Self {
            kind,
            target: Some(id),
            anchor,
            baseline,
            tint,
            preview: Some(baseline),
            valid: true,
        }
    }

    /// The drag kind.
    #[must_use]
    pub fn kind(&self) -> DragKind {
        self.kind
    }

    /// The block being moved/resized, if any.
    #[must_use]
    pub fn target(&self) -> Option<BlockId> {
        self.target
    }

    /// The live candidate geometry.
    #[must_use]
    pub fn preview(&self) -> Option<CellRect> {
        self.preview
    }

    /// Whether the current candidate could be committed.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// The tint the committed block will carry.
    #[must_use]
    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// Recompute the candidate for the current pointer position and
    /// revalidate it against `layout`.
    pub(crate) fn update(
        &mut self,
        pos: PixelPos,
        metrics: &GridMetrics,
        grid: GridConfig,
        layout: &Layout,
    ) {
        let cell_w = metrics.cell_width(grid);
        let cell_h = metrics.cell_height(grid);

        let candidate = match self.kind {
            DragKind::Move => {
                let dx = snap_delta(pos.x - self.anchor.x, cell_w);
                let dy = snap_delta(pos.y - self.anchor.y, cell_h);
                let (x, y) = clamp_origin(
                    i32::from(self.baseline.x) + dx,
                    i32::from(self.baseline.y) + dy,
                    self.baseline.w,
                    self.baseline.h,
                    grid,
                );
                CellRect::new(x, y, self.baseline.w, self.baseline.h)
            }
            DragKind::Resize => {
                let dx = snap_delta(pos.x - self.anchor.x, cell_w);
                let dy = snap_delta(pos.y - self.anchor.y, cell_h);
                let w = clamp_span(i32::from(self.baseline.w) + dx);
                let h = clamp_span(i32::from(self.baseline.h) + dy);
                CellRect::new(self.baseline.x, self.baseline.y, w, h)
            }
            DragKind::Create => {
                let local = metrics.local(pos);
                let (x, y) = clamp_origin(
                    cell_at(local.x, cell_w),
                    cell_at(local.y, cell_h),
                    self.baseline.w,
                    self.baseline.h,
                    grid,
                );
                CellRect::new(x, y, self.baseline.w, self.baseline.h)
            }
        };

        self.valid = candidate.within(grid) && !layout.collides(candidate, self.target);
        self.preview = Some(candidate);
    }
}
