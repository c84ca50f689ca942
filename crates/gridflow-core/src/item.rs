#![forbid(unsafe_code)]

//! Grid item model.
//!
//! A [`LayoutItem`] is one rectangle on the integer column/row grid. A layout
//! is an ordered `Vec<LayoutItem>`; array order is part of the external
//! contract (it breaks sorting ties deterministically), while id-based
//! lookups are expected to be O(1) amortized internally.
//!
//! # Invariants
//!
//! After any public engine operation completes without error:
//!
//! 1. `w >= 1`, `h >= 1` (zero-sized items never escape the engine).
//! 2. `x` and `y` are within grid bounds for the operation's column count.
//! 3. `moved` is `false` on every item (it is a transient marker scoped to
//!    a single compaction/move pass).
//! 4. No two non-static items overlap, unless a prevent-collision revert
//!    intentionally returned the caller's layout unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable string identifier for layout items, unique within one layout.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new id from any string-like value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ItemId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// One rectangular item on the grid.
///
/// Coordinates and sizes are in grid units. Optional `min_*`/`max_*` bounds
/// constrain resizing; `is_static` pins the item in place during compaction
/// and collision resolution (other items flow around it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub id: ItemId,
    /// Column of the left edge.
    pub x: u32,
    /// Row of the top edge.
    pub y: u32,
    /// Width in columns (>= 1).
    pub w: u32,
    /// Height in rows (>= 1).
    pub h: u32,
    #[serde(default)]
    pub min_w: Option<u32>,
    #[serde(default)]
    pub max_w: Option<u32>,
    #[serde(default)]
    pub min_h: Option<u32>,
    #[serde(default)]
    pub max_h: Option<u32>,
    /// Static items are never relocated by the engine.
    #[serde(rename = "static", default)]
    pub is_static: bool,
    /// Transient marker used during one move/compaction pass. Always
    /// `false` on layouts returned by public operations.
    #[serde(skip)]
    pub moved: bool,
    /// Explicit per-item draggability override (`None` = inherit).
    #[serde(default)]
    pub draggable: Option<bool>,
    /// Explicit per-item resizability override (`None` = inherit).
    #[serde(default)]
    pub resizable: Option<bool>,
}

impl LayoutItem {
    /// Create an item at `(x, y)` with size `(w, h)` and no optional
    /// constraints. Zero sizes are raised to 1.
    pub fn new(id: impl Into<ItemId>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w: w.max(1),
            h: h.max(1),
            min_w: None,
            max_w: None,
            min_h: None,
            max_h: None,
            is_static: false,
            moved: false,
            draggable: None,
            resizable: None,
        }
    }

    /// Set the minimum resize width.
    #[must_use]
    pub fn with_min_w(mut self, min_w: u32) -> Self {
        self.min_w = Some(min_w);
        self
    }

    /// Set the maximum resize width.
    #[must_use]
    pub fn with_max_w(mut self, max_w: u32) -> Self {
        self.max_w = Some(max_w);
        self
    }

    /// Set the minimum resize height.
    #[must_use]
    pub fn with_min_h(mut self, min_h: u32) -> Self {
        self.min_h = Some(min_h);
        self
    }

    /// Set the maximum resize height.
    #[must_use]
    pub fn with_max_h(mut self, max_h: u32) -> Self {
        self.max_h = Some(max_h);
        self
    }

    /// Pin the item in place.
    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Override draggability.
    #[must_use]
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = Some(draggable);
        self
    }

    /// Override resizability.
    #[must_use]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = Some(resizable);
        self
    }

    /// Column one past the right edge.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Row one past the bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Whether the engine may relocate this item during a user drag.
    ///
    /// A static item is immovable unless its `draggable` override is
    /// explicitly `true`.
    #[must_use]
    pub fn can_move(&self) -> bool {
        !self.is_static || self.draggable == Some(true)
    }

    /// Clamp a requested size into this item's resize bounds.
    ///
    /// Minimums default to 1, maximums to unbounded. The result always
    /// satisfies `w >= 1 && h >= 1`.
    #[must_use]
    pub fn clamped_size(&self, w: u32, h: u32) -> (u32, u32) {
        let min_w = self.min_w.unwrap_or(1).max(1);
        let min_h = self.min_h.unwrap_or(1).max(1);
        let max_w = self.max_w.unwrap_or(u32::MAX).max(min_w);
        let max_h = self.max_h.unwrap_or(u32::MAX).max(min_h);
        (w.clamp(min_w, max_w), h.clamp(min_h, max_h))
    }
}
