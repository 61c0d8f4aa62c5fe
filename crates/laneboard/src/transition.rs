#![forbid(unsafe_code)]

//! Pure drag transitions.
//!
//! Each transition takes the owned pre-transition [`Board`] snapshot and
//! returns the next board. Positions are computed against that one snapshot
//! before anything is touched, so a transition either commits a fully
//! recomputed board or hands the snapshot back untouched — no partially
//! mutated state can escape, and the item-conservation invariant holds for
//! every event sequence. The engine commits the returned board as the new
//! canonical state.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Outcome |
//! |---------|-------|---------|
//! | Unresolvable identifier | Stale or unknown id from the gesture source | Board returned unchanged |
//! | Active id names a lane | Gesture source handed a lane id as the drag source | Board returned unchanged |
//! | Hovered item not in its lane | Lookup raced a previous move | Board returned unchanged |
//! | Same-lane hover | Intra-lane reorder is finalized at drag end | Board returned unchanged |

use crate::board::{Board, DropRef, Id};

/// Cross-lane move, applied live on every hover frame.
///
/// Moving the pointer over a different lane migrates the active item there
/// immediately: appended when hovering the lane's own id (empty area or
/// end-of-lane), otherwise inserted immediately after the hovered item.
/// Hovering inside the item's current lane is ignored.
pub(crate) fn drag_over<T>(board: Board<T>, active: &Id, over: &Id) -> Board<T> {
    let Some(DropRef::Item { lane: source, .. }) = board.resolve(active) else {
        #[cfg(feature = "tracing")]
        tracing::trace!(active = %active, "drag-over ignored: active id is not a known item");
        return board;
    };
    let Some(over_ref) = board.resolve(over) else {
        #[cfg(feature = "tracing")]
        tracing::trace!(over = %over, "drag-over ignored: unresolved hover target");
        return board;
    };
    let dest = over_ref.lane().clone();
    if source == dest {
        return board;
    }

    let Some(from) = find_lane_position(&board, &source, active) else {
        return board;
    };
    let insert_at = match &over_ref {
        DropRef::Lane(_) => board.container(&dest).map(|lane| lane.len()),
        // Insert-after: the active item lands immediately following the
        // hovered item, never at or before it.
        DropRef::Item { id, .. } => find_lane_position(&board, &dest, id).map(|at| at + 1),
    };
    let Some(insert_at) = insert_at else {
        return board;
    };
    let (Some(src_idx), Some(dst_idx)) = (board.index_of(&source), board.index_of(&dest)) else {
        return board;
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(item = %active, from = %source, to = %dest, at = insert_at, "item moved across lanes");

    let mut board = board;
    let lanes = board.containers_mut();
    let item = lanes[src_idx].items_mut().remove(from);
    lanes[dst_idx].items_mut().insert(insert_at, item);
    board
}

/// Finalizing transition for the release of the pointer.
///
/// Only a same-lane gesture mutates here: the active item is repositioned to
/// the slot the hovered item occupies, shifting the run between them by one.
/// A cross-lane gesture already committed its placement incrementally during
/// hover, so it passes through unchanged.
pub(crate) fn drag_end<T>(board: Board<T>, active: &Id, over: &Id) -> Board<T> {
    let (Some(active_ref), Some(over_ref)) = (board.resolve(active), board.resolve(over)) else {
        #[cfg(feature = "tracing")]
        tracing::trace!(active = %active, over = %over, "drag-end ignored: unresolved identifier");
        return board;
    };
    if active_ref.lane() != over_ref.lane() || active == over {
        return board;
    }
    let lane = active_ref.lane().clone();
    let (Some(lane_idx), Some(lane_ref)) = (board.index_of(&lane), board.container(&lane)) else {
        return board;
    };
    let (Some(from), Some(to)) = (lane_ref.position_of(active), lane_ref.position_of(over)) else {
        return board;
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(item = %active, lane = %lane, from, to, "item reordered within lane");

    let mut board = board;
    let items = board.containers_mut()[lane_idx].items_mut();
    let item = items.remove(from);
    items.insert(to, item);
    board
}

fn find_lane_position<T>(board: &Board<T>, lane: &Id, id: &Id) -> Option<usize> {
    board.container(lane).and_then(|c| c.position_of(id))
}
