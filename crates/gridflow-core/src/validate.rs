#![forbid(unsafe_code)]

//! Explicit layout validation.
//!
//! The engine's hot path (one call per pointer-move sample) silently clamps
//! out-of-range values instead of failing. This module is the complementary
//! strict pass: callers run it when a layout crosses a trust boundary
//! (loaded from storage, received from another component), not on every
//! sample.

use crate::item::{ItemId, LayoutItem};
use rustc_hash::FxHashSet;
use std::fmt;

/// Errors produced by validation and by engine operations that must fail
/// fast (an id referenced by a gesture that is absent from the layout is a
/// programmer error on the caller's side, not a state to correct).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Two items share an id.
    DuplicateItemId { id: ItemId },
    /// An item has a zero width or height.
    ZeroSize { id: ItemId },
    /// An item is wider than the whole grid.
    WiderThanGrid { id: ItemId, w: u32, cols: u32 },
    /// An operation referenced an id that is not in the layout.
    UnknownItem { id: ItemId },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateItemId { id } => write!(f, "duplicate item id {id:?}"),
            Self::ZeroSize { id } => write!(f, "item {id:?} has zero width or height"),
            Self::WiderThanGrid { id, w, cols } => {
                write!(f, "item {id:?} is {w} columns wide on a {cols}-column grid")
            }
            Self::UnknownItem { id } => {
                write!(f, "item {id:?} is not present in the layout")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Strictly validate a layout: unique ids, positive sizes, and no item
/// wider than the grid.
///
/// Overlaps are deliberately not an error here: a layout handed to the
/// engine may overlap transiently and the compactor resolves it.
pub fn validate_layout(layout: &[LayoutItem], cols: u32) -> Result<(), LayoutError> {
    let mut seen: FxHashSet<&ItemId> = FxHashSet::default();
    for item in layout {
        if !seen.insert(&item.id) {
            return Err(LayoutError::DuplicateItemId {
                id: item.id.clone(),
            });
        }
        if item.w == 0 || item.h == 0 {
            return Err(LayoutError::ZeroSize {
                id: item.id.clone(),
            });
        }
        if item.w > cols {
            return Err(LayoutError::WiderThanGrid {
                id: item.id.clone(),
                w: item.w,
                cols,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_layout() {
        let layout = vec![
            LayoutItem::new("a", 0, 0, 2, 1),
            LayoutItem::new("b", 2, 0, 2, 1),
        ];
        assert!(validate_layout(&layout, 4).is_ok());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let layout = vec![
            LayoutItem::new("a", 0, 0, 1, 1),
            LayoutItem::new("a", 1, 0, 1, 1),
        ];
        assert_eq!(
            validate_layout(&layout, 4),
            Err(LayoutError::DuplicateItemId { id: "a".into() })
        );
    }

    #[test]
    fn rejects_zero_sizes() {
        let mut item = LayoutItem::new("a", 0, 0, 1, 1);
        item.h = 0;
        assert_eq!(
            validate_layout(&[item], 4),
            Err(LayoutError::ZeroSize { id: "a".into() })
        );
    }

    #[test]
    fn rejects_item_wider_than_grid() {
        let layout = vec![LayoutItem::new("a", 0, 0, 5, 1)];
        assert!(matches!(
            validate_layout(&layout, 4),
            Err(LayoutError::WiderThanGrid { cols: 4, w: 5, .. })
        ));
    }

    #[test]
    fn error_messages_name_the_item() {
        let err = LayoutError::UnknownItem { id: "ghost".into() };
        assert!(err.to_string().contains("ghost"));
    }
}
