#![forbid(unsafe_code)]

//! Single-item movement with cascading collision resolution.
//!
//! [`move_element`] relocates one item to a target cell and pushes whatever
//! it lands on out of the way, recursively. The result is deliberately left
//! uncompacted; callers run [`crate::compact`] afterward, exactly as the
//! drag orchestrator does.

use crate::collision::{collides, first_collision};
use crate::compact::sort_layout;
use gridflow_core::{CompactType, ItemId, LayoutError, LayoutItem};
use rustc_hash::FxHashMap;
use tracing::trace;

/// Relocate `id` to `(x, y)`, pushing colliding items away.
///
/// - Static items without an explicit draggable override are never moved;
///   the layout comes back unchanged.
/// - With `prevent_collision`, a target that overlaps anything reverts the
///   whole operation: the returned layout is value-equal to the input.
/// - `is_user_action` enables the "jump to the open space on the far side
///   of the collision" shortcut for directly-pushed items.
///
/// Fails fast with [`LayoutError::UnknownItem`] if `id` is not present —
/// that is a caller bug, not a state to correct.
pub fn move_element(
    layout: &[LayoutItem],
    id: &ItemId,
    x: u32,
    y: u32,
    is_user_action: bool,
    prevent_collision: bool,
    compact_type: CompactType,
    cols: u32,
) -> Result<Vec<LayoutItem>, LayoutError> {
    let mut working = layout.to_vec();
    let idx = index_of(&working, id)?;
    move_element_inner(
        &mut working,
        idx,
        Some(x),
        Some(y),
        is_user_action,
        prevent_collision,
        compact_type,
        cols,
    );
    for item in &mut working {
        item.moved = false;
    }
    Ok(working)
}

/// O(1)-amortized id lookup over the working vector.
pub(crate) fn index_of(layout: &[LayoutItem], id: &ItemId) -> Result<usize, LayoutError> {
    // One linear pass builds the map; subsequent lookups in the same call
    // chain reuse indices directly.
    let by_id: FxHashMap<&ItemId, usize> = layout
        .iter()
        .enumerate()
        .map(|(i, item)| (&item.id, i))
        .collect();
    by_id
        .get(id)
        .copied()
        .ok_or_else(|| LayoutError::UnknownItem { id: id.clone() })
}

/// Core mover. `x`/`y` of `None` leave that coordinate untouched, which is
/// how axis-constrained cascade pushes are expressed.
#[allow(clippy::too_many_arguments)]
pub(crate) fn move_element_inner(
    layout: &mut Vec<LayoutItem>,
    idx: usize,
    x: Option<u32>,
    y: Option<u32>,
    is_user_action: bool,
    prevent_collision: bool,
    compact_type: CompactType,
    cols: u32,
) {
    if !layout[idx].can_move() {
        return;
    }
    if x == Some(layout[idx].x) && y == Some(layout[idx].y) {
        return;
    }

    let old_x = layout[idx].x;
    let old_y = layout[idx].y;
    if let Some(x) = x {
        layout[idx].x = x;
    }
    if let Some(y) = y {
        layout[idx].y = y;
    }
    layout[idx].moved = true;

    // Scan in the direction of travel so the nearest collisions resolve
    // first: reversed sort order when moving toward the origin along the
    // compaction axis.
    let mut order = sorted_indices(layout, compact_type);
    let moving_toward_origin = match compact_type {
        CompactType::Vertical => y.is_some_and(|y| old_y >= y),
        CompactType::Horizontal => x.is_some_and(|x| old_x >= x),
        CompactType::None => false,
    };
    if moving_toward_origin {
        order.reverse();
    }

    let collisions: Vec<usize> = order
        .into_iter()
        .filter(|&i| i != idx && collides(&layout[i], &layout[idx]))
        .collect();

    if prevent_collision && !collisions.is_empty() {
        trace!(id = %layout[idx].id, "move reverted, collision prevented");
        layout[idx].x = old_x;
        layout[idx].y = old_y;
        layout[idx].moved = false;
        return;
    }

    for ci in collisions {
        // An item pushed earlier in this pass stays put; pushing it again
        // would cascade forever between the two.
        if layout[ci].moved {
            continue;
        }
        if layout[ci].is_static {
            // Obstacles do not yield; the moving item goes around instead.
            move_element_away_from_collision(layout, ci, idx, is_user_action, compact_type, cols);
        } else {
            move_element_away_from_collision(layout, idx, ci, is_user_action, compact_type, cols);
        }
    }
}

/// Push `to_move` out of the rectangle of `collides_with`.
///
/// On a direct user move the preferred spot is the free space on the near
/// side of the collision (above for vertical flow, left of it for
/// horizontal); failing that the item steps one cell forward along the
/// push axis and the cascade continues from there.
fn move_element_away_from_collision(
    layout: &mut Vec<LayoutItem>,
    collides_with: usize,
    to_move: usize,
    is_user_action: bool,
    compact_type: CompactType,
    cols: u32,
) {
    let horizontal = compact_type == CompactType::Horizontal;
    // Disabled compaction still pushes vertically.
    let vertical = !horizontal;
    // Travel through a pinned obstacle is never allowed.
    let prevent_collision = layout[collides_with].is_static;

    if is_user_action {
        let probe = LayoutItem::new(
            "__probe__",
            if horizontal {
                layout[collides_with]
                    .x
                    .saturating_sub(layout[to_move].w)
            } else {
                layout[to_move].x
            },
            if vertical {
                layout[collides_with]
                    .y
                    .saturating_sub(layout[to_move].h)
            } else {
                layout[to_move].y
            },
            layout[to_move].w,
            layout[to_move].h,
        );
        if first_collision(layout, &probe).is_none() {
            trace!(
                id = %layout[to_move].id,
                x = probe.x,
                y = probe.y,
                "pushing item to free space"
            );
            move_element_inner(
                layout,
                to_move,
                horizontal.then_some(probe.x),
                vertical.then_some(probe.y),
                false,
                prevent_collision,
                compact_type,
                cols,
            );
            return;
        }
    }

    move_element_inner(
        layout,
        to_move,
        horizontal.then_some(layout[to_move].x + 1),
        vertical.then_some(layout[to_move].y + 1),
        false,
        prevent_collision,
        compact_type,
        cols,
    );
}

/// Indices of `layout` in compaction sort order.
fn sorted_indices(layout: &[LayoutItem], compact_type: CompactType) -> Vec<usize> {
    let sorted = sort_layout(layout, compact_type);
    let by_id: FxHashMap<&ItemId, usize> = layout
        .iter()
        .enumerate()
        .map(|(i, item)| (&item.id, i))
        .collect();
    sorted.iter().map(|item| by_id[&item.id]).collect()
}
