#![forbid(unsafe_code)]

//! Pixel ↔ grid-unit coordinate mapping.
//!
//! Pure arithmetic with no collision awareness. Positions round to the
//! nearest cell boundary; sizes are offset by one so that a pixel span of
//! exactly one cell maps to a grid size of 1, not 0. Degenerate inputs
//! (zero columns, zero-height rows) map to 0 instead of dividing by zero.

use crate::collision::bottom;
use gridflow_core::{GridConfig, LayoutItem, PixelRect, RowHeight};

/// Width of one column in pixels, gap excluded.
#[must_use]
pub fn column_width_px(cols: u32, total_width_px: f64, gap: f64) -> f64 {
    if cols == 0 {
        return 0.0;
    }
    (total_width_px - gap * f64::from(cols - 1)) / f64::from(cols)
}

/// Effective row height in pixels for a config and its layout.
///
/// [`RowHeight::Fit`] divides the configured grid height across the
/// occupied rows, gap overhead removed, so the layout fills the grid
/// exactly. An empty layout or missing height yields 0.
#[must_use]
pub fn row_height_px(config: &GridConfig) -> f64 {
    match config.row_height {
        RowHeight::Fixed(px) => px,
        RowHeight::Fit => {
            let rows = bottom(&config.layout);
            if rows == 0 {
                return 0.0;
            }
            let height = config.height.unwrap_or(0.0);
            (height - config.gap * f64::from(rows - 1)) / f64::from(rows)
        }
    }
}

/// Horizontal pixel offset → column index (unclamped).
#[must_use]
pub fn screen_x_to_grid(px: f64, cols: u32, total_width_px: f64, gap: f64) -> i64 {
    if cols <= 1 {
        return 0;
    }
    let step = column_width_px(cols, total_width_px, gap) + gap;
    if step <= 0.0 {
        return 0;
    }
    (px / step).round() as i64
}

/// Vertical pixel offset → row index (unclamped).
#[must_use]
pub fn screen_y_to_grid(px: f64, row_height_px: f64, gap: f64) -> i64 {
    let step = row_height_px + gap;
    if step <= 0.0 {
        return 0;
    }
    (px / step).round() as i64
}

/// Pixel width → width in columns (unclamped; one cell-width maps to 1).
#[must_use]
pub fn screen_width_to_grid(px: f64, cols: u32, total_width_px: f64, gap: f64) -> i64 {
    let col = column_width_px(cols, total_width_px, gap);
    let step = col + gap;
    if step <= 0.0 {
        return 0;
    }
    ((px - col) / step).round() as i64 + 1
}

/// Pixel height → height in rows (unclamped; one row-height maps to 1).
#[must_use]
pub fn screen_height_to_grid(px: f64, row_height_px: f64, gap: f64) -> i64 {
    let step = row_height_px + gap;
    if step <= 0.0 {
        return 0;
    }
    ((px - row_height_px) / step).round() as i64 + 1
}

/// Column index → horizontal pixel offset.
#[must_use]
pub fn grid_x_to_screen(x: u32, cols: u32, total_width_px: f64, gap: f64) -> f64 {
    f64::from(x) * (column_width_px(cols, total_width_px, gap) + gap)
}

/// Row index → vertical pixel offset.
#[must_use]
pub fn grid_y_to_screen(y: u32, row_height_px: f64, gap: f64) -> f64 {
    f64::from(y) * (row_height_px + gap)
}

/// Width in columns → pixel width, inner gaps included.
#[must_use]
pub fn grid_width_to_screen(w: u32, cols: u32, total_width_px: f64, gap: f64) -> f64 {
    let col = column_width_px(cols, total_width_px, gap);
    f64::from(w) * col + f64::from(w.saturating_sub(1)) * gap
}

/// Height in rows → pixel height, inner gaps included.
#[must_use]
pub fn grid_height_to_screen(h: u32, row_height_px: f64, gap: f64) -> f64 {
    f64::from(h) * row_height_px + f64::from(h.saturating_sub(1)) * gap
}

/// Container-relative pixel rectangle an item renders at when snapped to
/// the grid.
#[must_use]
pub fn item_pixel_rect(
    config: &GridConfig,
    item: &LayoutItem,
    total_width_px: f64,
) -> PixelRect {
    let row = row_height_px(config);
    PixelRect {
        left: grid_x_to_screen(item.x, config.cols, total_width_px, config.gap),
        top: grid_y_to_screen(item.y, row, config.gap),
        width: grid_width_to_screen(item.w, config.cols, total_width_px, config.gap),
        height: grid_height_to_screen(item.h, row, config.gap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_width_accounts_for_gaps() {
        // 4 cols, 3 gaps of 10 px: (430 - 30) / 4 = 100.
        assert_eq!(column_width_px(4, 430.0, 10.0), 100.0);
    }

    #[test]
    fn screen_x_rounds_to_nearest_column() {
        assert_eq!(screen_x_to_grid(0.0, 4, 400.0, 0.0), 0);
        assert_eq!(screen_x_to_grid(49.0, 4, 400.0, 0.0), 0);
        assert_eq!(screen_x_to_grid(51.0, 4, 400.0, 0.0), 1);
        assert_eq!(screen_x_to_grid(-120.0, 4, 400.0, 0.0), -1);
    }

    #[test]
    fn degenerate_single_column_maps_to_zero() {
        assert_eq!(screen_x_to_grid(999.0, 1, 400.0, 0.0), 0);
        assert_eq!(screen_x_to_grid(999.0, 0, 400.0, 0.0), 0);
    }

    #[test]
    fn one_cell_width_maps_to_size_one() {
        // col width 100, gap 10.
        assert_eq!(screen_width_to_grid(100.0, 4, 430.0, 10.0), 1);
        assert_eq!(screen_width_to_grid(210.0, 4, 430.0, 10.0), 2);
        assert_eq!(screen_height_to_grid(50.0, 50.0, 0.0), 1);
    }

    #[test]
    fn fixed_row_height_passes_through() {
        let config = GridConfig::new(4);
        assert_eq!(row_height_px(&config), 100.0);
    }

    #[test]
    fn fit_row_height_divides_grid_height() {
        // Layout occupying 3 rows, height 300, no gap: 100 per row.
        let config = GridConfig::new(4)
            .with_row_height(RowHeight::Fit)
            .with_height(300.0)
            .with_layout(vec![LayoutItem::new("a", 0, 0, 1, 3)]);
        assert_eq!(row_height_px(&config), 100.0);
    }

    #[test]
    fn fit_row_height_removes_gap_overhead() {
        // 3 rows, 2 gaps of 15: (330 - 30) / 3 = 100.
        let config = GridConfig::new(4)
            .with_row_height(RowHeight::Fit)
            .with_height(330.0)
            .with_gap(15.0)
            .with_layout(vec![LayoutItem::new("a", 0, 0, 1, 3)]);
        assert_eq!(row_height_px(&config), 100.0);
    }

    #[test]
    fn fit_row_height_with_empty_layout_is_zero() {
        let config = GridConfig::new(4)
            .with_row_height(RowHeight::Fit)
            .with_height(300.0);
        assert_eq!(row_height_px(&config), 0.0);
    }

    #[test]
    fn forward_and_backward_position_maps_invert() {
        for x in 0..4u32 {
            let px = grid_x_to_screen(x, 4, 430.0, 10.0);
            assert_eq!(screen_x_to_grid(px, 4, 430.0, 10.0), i64::from(x));
        }
        for w in 1..=4u32 {
            let px = grid_width_to_screen(w, 4, 430.0, 10.0);
            assert_eq!(screen_width_to_grid(px, 4, 430.0, 10.0), i64::from(w));
        }
    }

    #[test]
    fn item_rect_round_trips_through_grid_units() {
        let config = GridConfig::new(4).with_gap(10.0);
        let item = LayoutItem::new("a", 2, 1, 2, 1);
        let rect = item_pixel_rect(&config, &item, 430.0);
        assert_eq!(rect.left, 220.0);
        assert_eq!(rect.top, 110.0);
        assert_eq!(rect.width, 210.0);
        assert_eq!(rect.height, 100.0);
    }
}
