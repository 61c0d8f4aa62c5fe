#![forbid(unsafe_code)]

//! Drag lifecycle handling.
//!
//! [`DragEngine`] owns the canonical [`Board`] and the active-drag
//! identifier, and drives the pure transitions off gesture lifecycle events.
//! The gesture source calls the `on_*` handlers (or feeds [`DragEvent`]s to
//! [`DragEngine::handle`]); the rendering surface reads back through
//! [`DragEngine::board`], [`DragEngine::active_id`], and
//! [`DragEngine::active_item`] and never writes.
//!
//! # Design
//!
//! ## Invariants
//!
//! 1. A drag gesture is well-formed: exactly one `Start`, zero or more
//!    `Over` frames, ending in `End` or `Cancel`. The gesture source
//!    delivers these strictly sequentially; every handler runs to
//!    completion before the next event arrives.
//! 2. The active-drag id is set by `Start`, carried through `Over` frames,
//!    and cleared by `End` and `Cancel` — always, even when the final
//!    transition is a no-op.
//! 3. Board mutation happens only through the snapshot transitions; a
//!    handler either commits a whole recomputed board or leaves the
//!    previous one in place.
//!
//! ## Failure Modes
//!
//! | Failure | Cause | Fallback |
//! |---------|-------|---------|
//! | Stale active or hover id | Gesture outlived a reference | Event ignored, board unchanged |
//! | `Over`/`End` without a target | Pointer outside every drop zone | `Over` ignored; `End` just clears the active id |
//! | `Cancel` after live hover moves | Escape mid-gesture | Active id cleared; hover moves stand (no rollback) |

use core::mem;

use crate::board::{Board, Id, Item};
use crate::transition;

// ---------------------------------------------------------------------------
// DragEvent
// ---------------------------------------------------------------------------

/// Canonical drag lifecycle event, as delivered by the gesture source.
///
/// `active` is the item being dragged; `over` is the id currently under the
/// pointer — a lane id or an item id, or `None` when the pointer is outside
/// every drop zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragEvent {
    /// A drag gesture began on the item with id `active`.
    Start {
        /// Id of the item being picked up.
        active: Id,
    },
    /// The pointer moved while dragging.
    Over {
        /// Id of the item being dragged.
        active: Id,
        /// What the pointer is currently over, if anything.
        over: Option<Id>,
    },
    /// The pointer was released.
    End {
        /// Id of the item being dragged.
        active: Id,
        /// The drop target under the pointer, if any.
        over: Option<Id>,
    },
    /// The gesture was cancelled (focus loss, Escape).
    Cancel,
}

// ---------------------------------------------------------------------------
// DragEngine
// ---------------------------------------------------------------------------

/// The drag state engine: canonical board plus active-drag bookkeeping.
///
/// # Examples
///
/// ```
/// use laneboard::{Board, DragEngine, Id};
///
/// let mut engine = DragEngine::new(Board::seed("todo", "done", ["draft", "review"]));
///
/// engine.on_drag_start(Id::new("1"));
/// engine.on_drag_over(&Id::new("1"), Some(&Id::new("done")));
/// engine.on_drag_end(&Id::new("1"), Some(&Id::new("done")));
///
/// assert!(engine.active_id().is_none());
/// assert_eq!(engine.board().container(&Id::new("done")).unwrap().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragEngine<T> {
    board: Board<T>,
    active_id: Option<Id>,
}

impl<T> DragEngine<T> {
    /// Create an engine owning the given board. No drag is in progress.
    #[must_use]
    pub fn new(board: Board<T>) -> Self {
        Self {
            board,
            active_id: None,
        }
    }

    /// The current board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board<T> {
        &self.board
    }

    /// Id of the item currently being dragged, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<&Id> {
        self.active_id.as_ref()
    }

    /// The item currently being dragged, for the floating drag preview.
    ///
    /// Scans all lanes for the active id; `None` when no drag is in
    /// progress or the id has gone stale. Read-only — the overlay consumes
    /// this without affecting board state.
    #[must_use]
    pub fn active_item(&self) -> Option<&Item<T>> {
        self.active_id.as_ref().and_then(|id| self.board.item(id))
    }

    /// Dispatch a lifecycle event to the matching handler.
    pub fn handle(&mut self, event: DragEvent) {
        match event {
            DragEvent::Start { active } => self.on_drag_start(active),
            DragEvent::Over { active, over } => self.on_drag_over(&active, over.as_ref()),
            DragEvent::End { active, over } => self.on_drag_end(&active, over.as_ref()),
            DragEvent::Cancel => self.on_drag_cancel(),
        }
    }

    /// Record the start of a drag gesture. No board mutation.
    pub fn on_drag_start(&mut self, active: Id) {
        #[cfg(feature = "tracing")]
        tracing::debug!(active = %active, "drag started");
        self.active_id = Some(active);
    }

    /// Live hover update: migrate the active item across lanes.
    ///
    /// Without a hover target this is a pure no-op — the drag is still in
    /// progress and the board stays as the last hover left it. Hovering
    /// within the item's own lane is also ignored; same-lane reordering is
    /// finalized at drag end.
    pub fn on_drag_over(&mut self, active: &Id, over: Option<&Id>) {
        let Some(over) = over else {
            return;
        };
        self.board = transition::drag_over(mem::take(&mut self.board), active, over);
    }

    /// Release of the pointer: commit, then clear the active id.
    ///
    /// A same-lane gesture performs the positional reorder here. A
    /// cross-lane gesture already settled during hover and passes through
    /// unchanged. With no drop target, only the active id is cleared.
    pub fn on_drag_end(&mut self, active: &Id, over: Option<&Id>) {
        if let Some(over) = over {
            self.board = transition::drag_end(mem::take(&mut self.board), active, over);
        }
        self.active_id = None;
    }

    /// Terminal cancel: clear the active id.
    ///
    /// Hover-driven moves already committed during the gesture stand as
    /// final; cancellation does not restore the pre-drag board.
    pub fn on_drag_cancel(&mut self) {
        #[cfg(feature = "tracing")]
        if let Some(active) = &self.active_id {
            tracing::debug!(active = %active, "drag cancelled");
        }
        self.active_id = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
