#![forbid(unsafe_code)]

//! Layout diffing for the render layer.
//!
//! After adopting an engine result, the host only wants to touch the
//! elements that actually changed. [`diff_layouts`] classifies each id
//! whose geometry differs between two layouts; unchanged items and ids
//! missing from either side are omitted.

use gridflow_core::{ItemId, LayoutItem};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// How one item's geometry changed between two layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutChange {
    /// `(x, y)` changed.
    Moved,
    /// `(w, h)` changed.
    Resized,
    /// Both position and size changed.
    MovedResized,
}

/// Classify every item whose position and/or size differs between `old`
/// and `new`.
#[must_use]
pub fn diff_layouts(old: &[LayoutItem], new: &[LayoutItem]) -> FxHashMap<ItemId, LayoutChange> {
    let old_by_id: FxHashMap<&ItemId, &LayoutItem> =
        old.iter().map(|item| (&item.id, item)).collect();
    let mut changes = FxHashMap::default();
    for item in new {
        let Some(prev) = old_by_id.get(&item.id) else {
            continue;
        };
        let moved = prev.x != item.x || prev.y != item.y;
        let resized = prev.w != item.w || prev.h != item.h;
        let change = match (moved, resized) {
            (true, true) => LayoutChange::MovedResized,
            (true, false) => LayoutChange::Moved,
            (false, true) => LayoutChange::Resized,
            (false, false) => continue,
        };
        changes.insert(item.id.clone(), change);
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_layouts_produce_no_changes() {
        let layout = vec![LayoutItem::new("a", 0, 0, 1, 1)];
        assert!(diff_layouts(&layout, &layout).is_empty());
    }

    #[test]
    fn classifies_move_resize_and_both() {
        let old = vec![
            LayoutItem::new("moved", 0, 0, 1, 1),
            LayoutItem::new("resized", 0, 1, 1, 1),
            LayoutItem::new("both", 0, 2, 1, 1),
            LayoutItem::new("same", 0, 3, 1, 1),
        ];
        let new = vec![
            LayoutItem::new("moved", 2, 0, 1, 1),
            LayoutItem::new("resized", 0, 1, 3, 1),
            LayoutItem::new("both", 1, 2, 2, 2),
            LayoutItem::new("same", 0, 3, 1, 1),
        ];
        let changes = diff_layouts(&old, &new);
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[&"moved".into()], LayoutChange::Moved);
        assert_eq!(changes[&"resized".into()], LayoutChange::Resized);
        assert_eq!(changes[&"both".into()], LayoutChange::MovedResized);
    }

    #[test]
    fn ids_missing_from_either_side_are_ignored() {
        let old = vec![LayoutItem::new("gone", 0, 0, 1, 1)];
        let new = vec![LayoutItem::new("added", 5, 5, 1, 1)];
        assert!(diff_layouts(&old, &new).is_empty());
    }
}
