#![forbid(unsafe_code)]

//! Grid layout solvers for gridflow.
//!
//! Given a desired new position or size for one or more items (derived
//! from pointer movement), this crate computes a legal, gap-free
//! arrangement of the whole grid: collision detection, compaction along
//! one axis, cascading single-item moves, rigid group moves, and the
//! pixel ↔ grid-unit mapping that ties a drag gesture to all of it.
//!
//! Every operation is synchronous and side-effect-free with respect to its
//! inputs: layouts come in by reference and go out as fresh vectors, so
//! concurrent grids (or multi-touch pointer streams on one grid) can call
//! in from separate contexts with their own snapshots. The compactor
//! re-scans placed items per item and can cascade, so a full pass is
//! O(n²) worst case — it runs on every pointer-move sample, which is worth
//! knowing for very large layouts.
//!
//! Entry points, leaf to root:
//!
//! - [`collision`]: pairwise overlap tests and layout queries.
//! - [`compact`]: gap removal with cascading push resolution.
//! - [`movement`]: [`move_element`] with prevent-collision revert.
//! - [`group`]: [`move_elements`] rigid group relocation.
//! - [`coords`]: pure pixel ↔ grid arithmetic.
//! - [`drag`]: per-sample orchestration ([`drag_item`], [`drag_group`],
//!   [`resize_item`]).
//! - [`diff`]: change classification for the render layer.

pub use gridflow_core::{
    Axis, CompactType, DragContext, GridConfig, GroupDragContext, ItemId, LayoutError,
    LayoutItem, PixelRect, PointerPosition, RowHeight, ScrollDelta, validate_layout,
};

pub mod collision;
pub mod compact;
pub mod coords;
pub mod diff;
pub mod drag;
pub mod group;
pub mod movement;

pub use collision::{all_collisions, bottom, collides, first_collision, static_items};
pub use compact::{compact, correct_bounds, sort_layout};
pub use coords::{item_pixel_rect, row_height_px};
pub use diff::{LayoutChange, diff_layouts};
pub use drag::{DragResult, GroupDragResult, drag_group, drag_item, resize_item};
pub use group::{GroupMove, move_elements};
pub use movement::move_element;
