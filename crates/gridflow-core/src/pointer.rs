#![forbid(unsafe_code)]

//! Per-sample gesture snapshots.
//!
//! The host UI layer owns the gesture state machine (threshold detection,
//! pointer capture, scroll handling). On every pointer-move sample it builds
//! one of these short-lived value objects and hands it to the engine; the
//! engine holds no reference to it afterward.
//!
//! All rectangles are client-viewport coordinates captured at drag start,
//! with scrolling folded into `scroll_delta` rather than re-measured rects.

use crate::geometry::{PixelRect, PointerPosition, ScrollDelta};
use crate::item::ItemId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Snapshot for a single-item drag or resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragContext {
    /// Pointer position at drag start.
    pub pointer_down: PointerPosition,
    /// Current pointer position.
    pub pointer: PointerPosition,
    /// Client rect of the grid container, captured at drag start.
    pub container_rect: PixelRect,
    /// Client rect of the manipulated element, captured at drag start.
    pub item_rect: PixelRect,
    /// Scroll offset accumulated since drag start.
    pub scroll_delta: ScrollDelta,
}

impl DragContext {
    /// Total pixel offset of this sample relative to drag start, scroll
    /// included.
    #[must_use]
    pub fn offset(&self) -> ScrollDelta {
        let pointer = self.pointer.delta_from(self.pointer_down);
        ScrollDelta {
            x: pointer.x + self.scroll_delta.x,
            y: pointer.y + self.scroll_delta.y,
        }
    }
}

/// Snapshot for a multi-item (group) drag gesture.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupDragContext {
    /// Pointer position at drag start.
    pub pointer_down: PointerPosition,
    /// Current pointer position.
    pub pointer: PointerPosition,
    /// Client rect of the grid container, captured at drag start.
    pub container_rect: PixelRect,
    /// Client rect of every selected element, captured at drag start.
    pub item_rects: FxHashMap<ItemId, PixelRect>,
    /// Scroll offset accumulated since drag start.
    pub scroll_delta: ScrollDelta,
}

impl GroupDragContext {
    /// Total pixel offset of this sample relative to drag start, scroll
    /// included.
    #[must_use]
    pub fn offset(&self) -> ScrollDelta {
        let pointer = self.pointer.delta_from(self.pointer_down);
        ScrollDelta {
            x: pointer.x + self.scroll_delta.x,
            y: pointer.y + self.scroll_delta.y,
        }
    }
}
