#![forbid(unsafe_code)]

//! Drag and resize orchestration.
//!
//! One entry point per gesture kind, each called once per pointer-move
//! sample and once more on pointer-up: convert the pixel-space pointer
//! delta to grid units, run the mover, compact, and hand back both the new
//! layout and the live pixel rectangle of the manipulated element so the
//! host can render it tracking the pointer instead of snapping to the grid
//! mid-gesture.
//!
//! The engine is stateless across samples; the caller owns the gesture
//! state machine and supplies a consistent [`DragContext`] snapshot
//! (captured at drag start) for the whole gesture.

use crate::collision::collides;
use crate::compact::compact;
use crate::coords::{
    row_height_px, screen_height_to_grid, screen_width_to_grid, screen_x_to_grid,
    screen_y_to_grid,
};
use crate::group::{GroupMove, move_elements};
use crate::movement::{index_of, move_element};
use gridflow_core::{
    DragContext, GridConfig, GroupDragContext, ItemId, LayoutError, LayoutItem, PixelRect,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of a single-item drag or resize sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragResult {
    /// The authoritative grid-unit layout to adopt.
    pub layout: Vec<LayoutItem>,
    /// Container-relative pixel rect tracking the pointer exactly.
    pub item_rect: PixelRect,
}

/// Result of a group drag sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDragResult {
    /// The authoritative grid-unit layout to adopt.
    pub layout: Vec<LayoutItem>,
    /// Container-relative pixel rect per selected item.
    pub item_rects: FxHashMap<ItemId, PixelRect>,
}

/// Process one drag sample for a single item.
///
/// The target cell is derived from the element's drag-start rect shifted by
/// the pointer delta, clamped into the grid (position shrinks, size never
/// does). Collisions cascade per the single-item mover, then the layout is
/// compacted.
pub fn drag_item(
    config: &GridConfig,
    ctx: &DragContext,
    id: &ItemId,
) -> Result<DragResult, LayoutError> {
    let idx = index_of(&config.layout, id)?;
    let item = &config.layout[idx];
    let offset = ctx.offset();
    let left = ctx.item_rect.left - ctx.container_rect.left + offset.x;
    let top = ctx.item_rect.top - ctx.container_rect.top + offset.y;

    let gx = screen_x_to_grid(left, config.cols, ctx.container_rect.width, config.gap);
    let gy = screen_y_to_grid(top, row_height_px(config), config.gap);
    let max_x = i64::from(config.cols.saturating_sub(item.w));
    let x = gx.clamp(0, max_x) as u32;
    let y = gy.max(0) as u32;
    debug!(%id, x, y, "drag sample");

    let moved = move_element(
        &config.layout,
        id,
        x,
        y,
        true,
        config.prevent_collision,
        config.compact_type,
        config.cols,
    )?;
    Ok(DragResult {
        layout: compact(&moved, config.compact_type, config.cols),
        item_rect: PixelRect::new(left, top, ctx.item_rect.width, ctx.item_rect.height),
    })
}

/// Process one drag sample for a group of items.
///
/// Each member gets its own target cell from its own drag-start rect; the
/// whole set is then shifted uniformly by the largest overflow so the
/// group re-enters bounds as a rigid body instead of deforming against the
/// edges.
pub fn drag_group(
    config: &GridConfig,
    ctx: &GroupDragContext,
) -> Result<GroupDragResult, LayoutError> {
    let offset = ctx.offset();
    let row_height = row_height_px(config);

    // Deterministic member order regardless of map iteration.
    let mut members: Vec<(&ItemId, &PixelRect)> = ctx.item_rects.iter().collect();
    members.sort_by(|a, b| a.0.cmp(b.0));

    struct Pending<'a> {
        id: &'a ItemId,
        rect: &'a PixelRect,
        gx: i64,
        gy: i64,
        w: u32,
    }
    let mut pending: Vec<Pending<'_>> = Vec::with_capacity(members.len());
    for (id, rect) in members {
        let idx = index_of(&config.layout, id)?;
        let left = rect.left - ctx.container_rect.left + offset.x;
        let top = rect.top - ctx.container_rect.top + offset.y;
        pending.push(Pending {
            id,
            rect,
            gx: screen_x_to_grid(left, config.cols, ctx.container_rect.width, config.gap),
            gy: screen_y_to_grid(top, row_height, config.gap),
            w: config.layout[idx].w,
        });
    }

    // Largest overflow across the group decides one uniform shift.
    let mut shift_x = 0i64;
    let mut shift_y = 0i64;
    if let Some(min_x) = pending.iter().map(|p| p.gx).min() {
        shift_x = shift_x.max(-min_x);
    }
    if let Some(min_y) = pending.iter().map(|p| p.gy).min() {
        shift_y = shift_y.max(-min_y);
    }
    if let Some(max_right) = pending.iter().map(|p| p.gx + i64::from(p.w)).max() {
        let over = max_right + shift_x - i64::from(config.cols);
        if over > 0 {
            shift_x -= over;
        }
    }
    debug!(members = pending.len(), shift_x, shift_y, "group drag sample");

    let moves: Vec<GroupMove> = pending
        .iter()
        .map(|p| {
            GroupMove::new(
                p.id.clone(),
                (p.gx + shift_x).max(0) as u32,
                (p.gy + shift_y).max(0) as u32,
            )
        })
        .collect();
    let layout = move_elements(
        &config.layout,
        &moves,
        true,
        config.prevent_collision,
        config.compact_type,
        config.cols,
    )?;

    let item_rects = pending
        .iter()
        .map(|p| {
            let rect = PixelRect::new(
                p.rect.left - ctx.container_rect.left + offset.x,
                p.rect.top - ctx.container_rect.top + offset.y,
                p.rect.width,
                p.rect.height,
            );
            (p.id.clone(), rect)
        })
        .collect();

    Ok(GroupDragResult { layout, item_rects })
}

/// Process one resize sample.
///
/// The new size comes from the pointer delta relative to the item's fixed
/// top-left corner, clamped to the item's resize bounds and the grid
/// width. With `prevent_collision`, the grown dimensions shrink back one
/// unit at a time (alternating) until the item fits, then re-expand where
/// space allows.
pub fn resize_item(
    config: &GridConfig,
    ctx: &DragContext,
    id: &ItemId,
) -> Result<DragResult, LayoutError> {
    let idx = index_of(&config.layout, id)?;
    let item = &config.layout[idx];
    let offset = ctx.offset();
    let live = PixelRect::new(
        ctx.item_rect.left - ctx.container_rect.left,
        ctx.item_rect.top - ctx.container_rect.top,
        (ctx.item_rect.width + offset.x).max(0.0),
        (ctx.item_rect.height + offset.y).max(0.0),
    );

    if item.is_static && item.resizable != Some(true) {
        return Ok(DragResult {
            layout: config.layout.clone(),
            item_rect: live,
        });
    }

    let gw = screen_width_to_grid(live.width, config.cols, ctx.container_rect.width, config.gap)
        .max(1) as u32;
    let gh = screen_height_to_grid(live.height, row_height_px(config), config.gap).max(1) as u32;
    let (mut w, mut h) = item.clamped_size(gw, gh);
    w = w.min(config.cols.saturating_sub(item.x)).max(1);
    debug!(%id, w, h, "resize sample");

    let mut working = config.layout.clone();
    if config.prevent_collision {
        let (target_w, target_h) = (w, h);
        let (base_w, base_h) = (item.w, item.h);
        let mut shrink_width = w > base_w;
        while overlaps_at(&working, idx, w, h) && (w > base_w || h > base_h) {
            if shrink_width && w > base_w {
                w -= 1;
            } else if h > base_h {
                h -= 1;
            } else {
                w -= 1;
            }
            shrink_width = !shrink_width;
        }
        // Give back whatever room is actually free, width first.
        while w < target_w && !overlaps_at(&working, idx, w + 1, h) {
            w += 1;
        }
        while h < target_h && !overlaps_at(&working, idx, w, h + 1) {
            h += 1;
        }
    }
    working[idx].w = w;
    working[idx].h = h;

    Ok(DragResult {
        layout: compact(&working, config.compact_type, config.cols),
        item_rect: live,
    })
}

/// Whether resizing `layout[idx]` to `(w, h)` would overlap anything else.
fn overlaps_at(layout: &[LayoutItem], idx: usize, w: u32, h: u32) -> bool {
    let mut probe = layout[idx].clone();
    probe.w = w;
    probe.h = h;
    layout.iter().any(|other| collides(other, &probe))
}
