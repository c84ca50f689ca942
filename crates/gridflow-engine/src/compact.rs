#![forbid(unsafe_code)]

//! Gap removal along one axis.
//!
//! The compactor takes a layout and produces a new one with no unnecessary
//! gaps: every non-static item slides toward row 0 (vertical) or column 0
//! (horizontal) until blocked, and any remaining overlap is resolved by
//! pushing items forward with a cascading worklist.
//!
//! # Invariants
//!
//! 1. Idempotent: compacting a compacted layout is a no-op.
//! 2. Output has no overlapping pairs (assuming statics do not overlap each
//!    other on input).
//! 3. The id set and array order of the input are preserved.
//! 4. `moved` is cleared on every output item.

use crate::collision::{bottom, collides, first_collision};
use gridflow_core::{Axis, CompactType, ItemId, LayoutItem};
use rustc_hash::FxHashMap;
use tracing::trace;

/// Sort a layout in compaction order: row-major (`y`, then `x`) for
/// vertical and disabled compaction, column-major (`x`, then `y`) for
/// horizontal. The sort is stable, so equal positions keep their original
/// array order — this is the deterministic tie-break every cascading
/// operation relies on.
#[must_use]
pub fn sort_layout(layout: &[LayoutItem], compact_type: CompactType) -> Vec<LayoutItem> {
    let mut sorted = layout.to_vec();
    match compact_type {
        CompactType::Horizontal => sorted.sort_by(|a, b| (a.x, a.y).cmp(&(b.x, b.y))),
        CompactType::Vertical | CompactType::None => {
            sorted.sort_by(|a, b| (a.y, a.x).cmp(&(b.y, b.x)));
        }
    }
    sorted
}

/// Compact `layout` along the configured axis.
///
/// Static items are left exactly where they are and act as obstacles.
/// With [`CompactType::None`] no sliding happens, but overlaps are still
/// pushed apart vertically so the no-overlap invariant holds.
#[must_use]
pub fn compact(layout: &[LayoutItem], compact_type: CompactType, cols: u32) -> Vec<LayoutItem> {
    trace!(items = layout.len(), ?compact_type, cols, "compact");
    let mut compare_with: Vec<LayoutItem> =
        layout.iter().filter(|i| i.is_static).cloned().collect();
    let mut sorted = sort_layout(layout, compact_type);

    for idx in 0..sorted.len() {
        if !sorted[idx].is_static {
            compact_item(&compare_with, &mut sorted, idx, compact_type, cols);
            compare_with.push(sorted[idx].clone());
        }
        sorted[idx].moved = false;
    }

    restore_order(layout, sorted)
}

/// Map a working vector back onto the input's array order.
fn restore_order(original: &[LayoutItem], working: Vec<LayoutItem>) -> Vec<LayoutItem> {
    let mut by_id: FxHashMap<ItemId, LayoutItem> = working
        .into_iter()
        .map(|item| (item.id.clone(), item))
        .collect();
    original
        .iter()
        .filter_map(|orig| by_id.remove(&orig.id))
        .collect()
}

/// Place one item: slide toward the origin until blocked, then push past
/// any remaining colliders.
fn compact_item(
    compare_with: &[LayoutItem],
    sorted: &mut [LayoutItem],
    idx: usize,
    compact_type: CompactType,
    cols: u32,
) {
    match compact_type {
        CompactType::Vertical => {
            // Nothing sits below everything already placed, so anything
            // further down can jump straight to the current bottom.
            sorted[idx].y = sorted[idx].y.min(bottom(compare_with));
            while sorted[idx].y > 0 && first_collision(compare_with, &sorted[idx]).is_none() {
                sorted[idx].y -= 1;
            }
        }
        CompactType::Horizontal => {
            while sorted[idx].x > 0 && first_collision(compare_with, &sorted[idx]).is_none() {
                sorted[idx].x -= 1;
            }
        }
        CompactType::None => {}
    }

    loop {
        let Some(hit) = first_collision(compare_with, &sorted[idx]) else {
            break;
        };
        let (move_to, axis) = if compact_type == CompactType::Horizontal {
            (hit.right(), Axis::X)
        } else {
            (hit.bottom(), Axis::Y)
        };
        resolve_compaction_collision(sorted, idx, move_to, axis);

        // Horizontal overflow wraps to the start of the next row.
        if compact_type == CompactType::Horizontal && sorted[idx].right() > cols {
            sorted[idx].x = cols.saturating_sub(sorted[idx].w);
            sorted[idx].y += 1;
            while sorted[idx].x > 0 && first_collision(compare_with, &sorted[idx]).is_none() {
                sorted[idx].x -= 1;
            }
        }
    }
}

struct Frame {
    /// Index into the sorted working slice.
    idx: usize,
    /// Final coordinate this item settles at when the frame exits.
    move_to: u32,
    /// Next scan position.
    next: usize,
}

/// Push `sorted[start]` to `move_to` along `axis`, first pushing any item
/// it would land on by the same rule.
///
/// Only items after `start` in sort order are ever touched, so the cascade
/// cannot loop. The original formulation is recursive; an explicit frame
/// stack keeps the depth off the call stack for large grids. While a frame
/// is open its item sits one step past its old position so colliders are
/// detected against the in-flight rectangle.
fn resolve_compaction_collision(sorted: &mut [LayoutItem], start: usize, move_to: u32, axis: Axis) {
    let mut stack: Vec<Frame> = Vec::new();
    let pos = axis.pos(&sorted[start]);
    axis.set_pos(&mut sorted[start], pos + 1);
    stack.push(Frame {
        idx: start,
        move_to,
        next: start + 1,
    });

    while let Some(frame) = stack.last_mut() {
        let (idx, target, scan) = (frame.idx, frame.move_to, frame.next);
        if scan >= sorted.len() {
            stack.pop();
            axis.set_pos(&mut sorted[idx], target);
            continue;
        }
        // Sorted order makes everything past this edge collision-free.
        if axis.pos(&sorted[scan]) > axis.pos(&sorted[idx]) + axis.size(&sorted[idx]) {
            stack.pop();
            axis.set_pos(&mut sorted[idx], target);
            continue;
        }
        frame.next += 1;
        if sorted[scan].is_static {
            continue;
        }
        if collides(&sorted[idx], &sorted[scan]) {
            let child_target = target + axis.size(&sorted[idx]);
            let pos = axis.pos(&sorted[scan]);
            axis.set_pos(&mut sorted[scan], pos + 1);
            stack.push(Frame {
                idx: scan,
                move_to: child_target,
                next: scan + 1,
            });
        }
    }
}

/// Clamp every item into the column range, preferring to shift position
/// and shrinking width only for items wider than the whole grid. Static
/// items that end up overlapping are stepped down row by row.
#[must_use]
pub fn correct_bounds(layout: &[LayoutItem], cols: u32) -> Vec<LayoutItem> {
    let cols = cols.max(1);
    let mut out = layout.to_vec();
    let mut seen: Vec<usize> = (0..out.len()).filter(|&i| out[i].is_static).collect();
    for i in 0..out.len() {
        if out[i].right() > cols {
            out[i].x = cols.saturating_sub(out[i].w);
        }
        if out[i].w > cols {
            out[i].x = 0;
            out[i].w = cols;
        }
        if out[i].is_static {
            // Statics cannot be pushed aside later, so resolve now.
            while seen
                .iter()
                .any(|&j| j != i && collides(&out[j], &out[i]))
            {
                out[i].y += 1;
            }
        } else {
            seen.push(i);
        }
    }
    out
}
