#![forbid(unsafe_code)]

//! Board data model: identifiers, items, lanes, and lookup.
//!
//! A [`Board`] is an ordered run of [`Container`] lanes, each holding an
//! ordered run of [`Item`]s with opaque content. Container ids and item ids
//! share a single flat namespace: an [`Id`] resolves to either a lane or an
//! item, never both. [`Board::resolve`] performs that resolution and reports
//! which side of the namespace matched via [`DropRef`].
//!
//! # Invariants
//!
//! 1. Every item id appears in the items of exactly one container.
//! 2. No two containers and no two items share an id; [`Board::from_containers`]
//!    asserts this at construction.
//! 3. Container order is fixed at construction and preserved through every
//!    mutation. Item order within a lane is the display order and changes
//!    only where a transition explicitly moves or reorders an item.

use core::fmt;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Id
// ---------------------------------------------------------------------------

/// Identifier in the board's flat namespace.
///
/// Lanes and items draw their ids from the same namespace, so a bare `Id`
/// does not say what it names; use [`Board::resolve`] to find out. Ids are
/// stable for the lifetime of the board and never reused.
///
/// # Examples
///
/// ```
/// # use laneboard::Id;
/// let id = Id::new("task-3");
/// assert_eq!(id.as_str(), "task-3");
/// assert_eq!(Id::from("task-3"), id);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    /// Create an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// A draggable unit of opaque content.
///
/// The engine moves and reorders items but never inspects `content`; it is
/// carried through unmodified for the rendering surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<T> {
    id: Id,
    content: T,
}

impl<T> Item<T> {
    /// Create an item with the given id and content.
    #[must_use]
    pub fn new(id: impl Into<Id>, content: T) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    /// The item's id.
    #[must_use]
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// The opaque content payload.
    #[must_use]
    pub fn content(&self) -> &T {
        &self.content
    }
}

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// An ordered lane of items with a stable identity, rendered as one drop zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container<T> {
    id: Id,
    title: String,
    items: Vec<Item<T>>,
}

impl<T> Container<T> {
    /// Create an empty lane.
    #[must_use]
    pub fn new(id: impl Into<Id>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Seed the lane with initial items.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item<T>>) -> Self {
        self.items = items.into_iter().collect();
        self
    }

    /// The lane's id.
    #[must_use]
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Display label; opaque to the engine.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The lane's items, in display order.
    #[must_use]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Number of items in the lane.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the lane holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the item with the given id, if present.
    #[must_use]
    pub fn position_of(&self, id: &Id) -> Option<usize> {
        self.items.iter().position(|item| item.id == *id)
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<Item<T>> {
        &mut self.items
    }
}

// ---------------------------------------------------------------------------
// DropRef
// ---------------------------------------------------------------------------

/// Resolution of an id against the board's flat namespace.
///
/// A hovered id may name a lane itself (a drop onto the lane's empty area or
/// end-of-lane) or an item inside a lane. Resolving once per event makes the
/// dual use explicit instead of relying on incidental non-collision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropRef {
    /// The id names a lane.
    Lane(Id),
    /// The id names an item currently held by `lane`.
    Item {
        /// The item's own id.
        id: Id,
        /// Id of the lane holding the item.
        lane: Id,
    },
}

impl DropRef {
    /// The lane this reference lands in: the lane itself, or the lane
    /// holding the referenced item.
    #[must_use]
    pub fn lane(&self) -> &Id {
        match self {
            Self::Lane(id) => id,
            Self::Item { lane, .. } => lane,
        }
    }

    /// Returns true if the reference names a lane rather than an item.
    #[must_use]
    pub fn is_lane(&self) -> bool {
        matches!(self, Self::Lane(_))
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The ordered sequence of lanes.
///
/// Lane count, lane ids, and lane order are fixed at construction; items only
/// move between lanes or reorder within one. The board hands out read-only
/// views; mutation happens exclusively through the engine's transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<T> {
    containers: Vec<Container<T>>,
}

impl<T> Default for Board<T> {
    fn default() -> Self {
        Self {
            containers: Vec::new(),
        }
    }
}

impl<T> Board<T> {
    /// Build a board from fully-formed lanes.
    ///
    /// # Panics
    ///
    /// Panics if two lanes, two items, or a lane and an item share an id.
    #[must_use]
    pub fn from_containers(containers: Vec<Container<T>>) -> Self {
        let mut seen = HashSet::new();
        for container in &containers {
            assert!(
                seen.insert(container.id.as_str()),
                "container and item ids must be unique: {}",
                container.id
            );
            for item in &container.items {
                assert!(
                    seen.insert(item.id.as_str()),
                    "container and item ids must be unique: {}",
                    item.id
                );
            }
        }
        Self { containers }
    }

    /// Seed a two-lane board from an ordered run of content values.
    ///
    /// The primary lane receives one item per content value, with ids
    /// assigned positionally as `"1"`, `"2"`, … The secondary lane starts
    /// empty. Both lanes use their id as title.
    ///
    /// # Examples
    ///
    /// ```
    /// # use laneboard::{Board, Id};
    /// let board = Board::seed("todo", "done", ["draft", "review"]);
    /// let todo = board.container(&Id::new("todo")).unwrap();
    /// assert_eq!(todo.items()[0].id(), &Id::new("1"));
    /// assert!(board.container(&Id::new("done")).unwrap().is_empty());
    /// ```
    #[must_use]
    pub fn seed(
        primary: impl Into<Id>,
        secondary: impl Into<Id>,
        contents: impl IntoIterator<Item = T>,
    ) -> Self {
        let primary = primary.into();
        let secondary = secondary.into();
        let items = contents
            .into_iter()
            .enumerate()
            .map(|(index, content)| Item::new((index + 1).to_string(), content));
        Self::from_containers(vec![
            Container::new(primary.clone(), primary.as_str()).with_items(items),
            Container::new(secondary.clone(), secondary.as_str()),
        ])
    }

    /// The lanes, in fixed display order.
    #[must_use]
    pub fn containers(&self) -> &[Container<T>] {
        &self.containers
    }

    /// Look up a lane by its id.
    #[must_use]
    pub fn container(&self, id: &Id) -> Option<&Container<T>> {
        self.containers.iter().find(|c| c.id == *id)
    }

    /// Resolve an id against the flat namespace.
    ///
    /// Lane ids win first (a lane id is a valid drop target for its own
    /// empty area); otherwise the lanes are scanned for an item with that
    /// id. Returns `None` for a stale or unknown reference, which callers
    /// treat as a no-op.
    #[must_use]
    pub fn resolve(&self, id: &Id) -> Option<DropRef> {
        if self.containers.iter().any(|c| c.id == *id) {
            return Some(DropRef::Lane(id.clone()));
        }
        self.containers
            .iter()
            .find(|c| c.position_of(id).is_some())
            .map(|c| DropRef::Item {
                id: id.clone(),
                lane: c.id.clone(),
            })
    }

    /// Id of the lane an id lands in, or `None` for a stale reference.
    #[must_use]
    pub fn container_of(&self, id: &Id) -> Option<Id> {
        self.resolve(id).map(|drop_ref| drop_ref.lane().clone())
    }

    /// Scan all lanes for the item with the given id.
    #[must_use]
    pub fn item(&self, id: &Id) -> Option<&Item<T>> {
        self.containers
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.id == *id)
    }

    /// Total number of items across all lanes.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.containers.iter().map(Container::len).sum()
    }

    pub(crate) fn index_of(&self, id: &Id) -> Option<usize> {
        self.containers.iter().position(|c| c.id == *id)
    }

    pub(crate) fn containers_mut(&mut self) -> &mut [Container<T>] {
        &mut self.containers
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
