#![forbid(unsafe_code)]

//! Multi-lane drag-and-drop board state engine.
//!
//! A fixed set of items with opaque content is distributed across a small,
//! fixed set of named lanes. A pointer-driven drag gesture can reorder an
//! item within its lane or move it into another lane at an arbitrary
//! position. This crate is only the state model: it turns drag lifecycle
//! events into lane/item mutations, keeps the board consistent across every
//! intermediate hover frame, and tracks the item being dragged so a
//! rendering surface can paint a floating preview. Gesture detection and
//! painting are external collaborators.
//!
//! # Model
//!
//! - [`Board`] — the ordered lanes ([`Container`]) and their ordered
//!   [`Item`]s. Lane ids and item ids share one flat [`Id`] namespace.
//! - [`DragEngine`] — owns the board and the active-drag id, and applies a
//!   pure snapshot transition per lifecycle event.
//! - [`DragEvent`] — the lifecycle contract with the gesture source:
//!   `Start`, `Over`, `End`, `Cancel`.
//!
//! Cross-lane moves commit live while the pointer hovers (the lanes update
//! before the gesture ends); same-lane reordering is finalized on release.
//! Stale or unknown identifiers degrade to silent no-ops — a stray event
//! never corrupts the board.
//!
//! # Example
//!
//! ```
//! use laneboard::{Board, DragEngine, DragEvent, Id};
//!
//! // One seeded lane plus the designated empty secondary lane.
//! let board = Board::seed("backlog", "doing", ["triage", "bisect", "patch"]);
//! let mut engine = DragEngine::new(board);
//!
//! // Drag item "2" ("bisect") into the empty lane.
//! engine.handle(DragEvent::Start { active: Id::new("2") });
//! engine.handle(DragEvent::Over {
//!     active: Id::new("2"),
//!     over: Some(Id::new("doing")),
//! });
//! assert_eq!(engine.active_item().map(|item| *item.content()), Some("bisect"));
//!
//! engine.handle(DragEvent::End {
//!     active: Id::new("2"),
//!     over: Some(Id::new("doing")),
//! });
//! assert!(engine.active_id().is_none());
//!
//! let doing = engine.board().container(&Id::new("doing")).unwrap();
//! assert_eq!(doing.items()[0].content(), &"bisect");
//! ```

pub mod board;
pub mod engine;
mod transition;

pub use board::{Board, Container, DropRef, Id, Item};
pub use engine::{DragEngine, DragEvent};
