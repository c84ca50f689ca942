#![forbid(unsafe_code)]

//! Grid configuration snapshot.
//!
//! [`GridConfig`] is the read-only input to every engine call: grid shape,
//! pixel metrics, collision policy, and the current layout. The engine never
//! mutates a config; it produces fresh layout vectors.

use crate::item::LayoutItem;
use serde::{Deserialize, Serialize};

/// Compaction mode: which axis (if any) gaps are removed along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompactType {
    /// Slide items toward row 0.
    #[default]
    Vertical,
    /// Slide items toward column 0, wrapping overflow to the next row.
    Horizontal,
    /// No compaction; items keep requested coordinates, bounds-clamped.
    None,
}

impl CompactType {
    /// The compaction axis, or `None` when compaction is disabled.
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::Vertical => Some(Axis::Y),
            Self::Horizontal => Some(Axis::X),
            Self::None => None,
        }
    }

    /// The axis items are pushed along when a collision must be resolved.
    ///
    /// Disabled compaction still needs a push direction for cascading
    /// moves; it behaves like vertical there.
    #[must_use]
    pub const fn push_axis(self) -> Axis {
        match self {
            Self::Horizontal => Axis::X,
            Self::Vertical | Self::None => Axis::Y,
        }
    }
}

/// One grid axis, used to write axis-agnostic solver routines instead of
/// duplicating vertical/horizontal branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Columns.
    X,
    /// Rows.
    Y,
}

impl Axis {
    /// Position of `item` along this axis.
    #[inline]
    #[must_use]
    pub const fn pos(self, item: &LayoutItem) -> u32 {
        match self {
            Self::X => item.x,
            Self::Y => item.y,
        }
    }

    /// Set the position of `item` along this axis.
    #[inline]
    pub const fn set_pos(self, item: &mut LayoutItem, value: u32) {
        match self {
            Self::X => item.x = value,
            Self::Y => item.y = value,
        }
    }

    /// Size of `item` along this axis.
    #[inline]
    #[must_use]
    pub const fn size(self, item: &LayoutItem) -> u32 {
        match self {
            Self::X => item.w,
            Self::Y => item.h,
        }
    }
}

/// Row height configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowHeight {
    /// Fixed row height in pixels.
    Fixed(f64),
    /// Derive row height from the configured grid height and the number of
    /// occupied rows, so the layout fills the available space exactly.
    Fit,
}

impl Default for RowHeight {
    fn default() -> Self {
        Self::Fixed(100.0)
    }
}

/// Read-only grid snapshot passed into every engine call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns (>= 1).
    pub cols: u32,
    /// Row height mode.
    pub row_height: RowHeight,
    /// Grid pixel height, required for [`RowHeight::Fit`].
    pub height: Option<f64>,
    /// Gap between adjacent cells in pixels.
    pub gap: f64,
    /// Reject (revert) moves/resizes that would overlap instead of pushing
    /// other items away.
    pub prevent_collision: bool,
    /// Compaction mode applied after every move/resize.
    pub compact_type: CompactType,
    /// The committed layout at the time of this sample.
    pub layout: Vec<LayoutItem>,
}

impl GridConfig {
    /// Create a config with `cols` columns and default metrics: fixed
    /// 100 px rows, no gap, pushing collisions, vertical compaction.
    pub fn new(cols: u32) -> Self {
        Self {
            cols: cols.max(1),
            row_height: RowHeight::default(),
            height: None,
            gap: 0.0,
            prevent_collision: false,
            compact_type: CompactType::default(),
            layout: Vec::new(),
        }
    }

    /// Set the row height mode.
    #[must_use]
    pub fn with_row_height(mut self, row_height: RowHeight) -> Self {
        self.row_height = row_height;
        self
    }

    /// Set the grid pixel height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the inter-cell gap in pixels.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Set the collision policy.
    #[must_use]
    pub fn with_prevent_collision(mut self, prevent: bool) -> Self {
        self.prevent_collision = prevent;
        self
    }

    /// Set the compaction mode.
    #[must_use]
    pub fn with_compact_type(mut self, compact_type: CompactType) -> Self {
        self.compact_type = compact_type;
        self
    }

    /// Set the layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Vec<LayoutItem>) -> Self {
        self.layout = layout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_accessors() {
        let mut item = LayoutItem::new("a", 1, 2, 3, 4);
        assert_eq!(Axis::X.pos(&item), 1);
        assert_eq!(Axis::Y.pos(&item), 2);
        assert_eq!(Axis::X.size(&item), 3);
        assert_eq!(Axis::Y.size(&item), 4);
        Axis::Y.set_pos(&mut item, 9);
        assert_eq!(item.y, 9);
    }

    #[test]
    fn compact_type_axes() {
        assert_eq!(CompactType::Vertical.axis(), Some(Axis::Y));
        assert_eq!(CompactType::Horizontal.axis(), Some(Axis::X));
        assert_eq!(CompactType::None.axis(), None);
        assert_eq!(CompactType::None.push_axis(), Axis::Y);
    }

    #[test]
    fn config_clamps_degenerate_cols() {
        assert_eq!(GridConfig::new(0).cols, 1);
    }
}
