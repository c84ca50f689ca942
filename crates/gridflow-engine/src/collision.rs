#![forbid(unsafe_code)]

//! Rectangle collision queries over a layout.
//!
//! All overlap tests are strict: items that merely share an edge do not
//! collide. An item never collides with itself (same id).

use gridflow_core::LayoutItem;

/// Whether two items strictly overlap on both axes.
#[inline]
#[must_use]
pub fn collides(a: &LayoutItem, b: &LayoutItem) -> bool {
    if a.id == b.id {
        return false;
    }
    if a.right() <= b.x || b.right() <= a.x {
        return false;
    }
    if a.bottom() <= b.y || b.bottom() <= a.y {
        return false;
    }
    true
}

/// First entry of `layout` (in array order) colliding with `item`.
#[must_use]
pub fn first_collision<'a>(layout: &'a [LayoutItem], item: &LayoutItem) -> Option<&'a LayoutItem> {
    layout.iter().find(|other| collides(other, item))
}

/// All entries of `layout` colliding with `item`, array order preserved.
#[must_use]
pub fn all_collisions<'a>(layout: &'a [LayoutItem], item: &LayoutItem) -> Vec<&'a LayoutItem> {
    layout.iter().filter(|other| collides(other, item)).collect()
}

/// All static items, array order preserved. These seed the "already
/// placed" set the compactor routes other items around.
#[must_use]
pub fn static_items(layout: &[LayoutItem]) -> Vec<&LayoutItem> {
    layout.iter().filter(|item| item.is_static).collect()
}

/// One past the last occupied row: `max(y + h)` across the layout, or 0
/// for an empty layout.
#[must_use]
pub fn bottom(layout: &[LayoutItem]) -> u32 {
    layout.iter().map(LayoutItem::bottom).max().unwrap_or(0)
}
