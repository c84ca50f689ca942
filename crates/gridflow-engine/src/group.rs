#![forbid(unsafe_code)]

//! Multi-item (group) movement.
//!
//! A selected set of items moves as a rigid body: targets are applied
//! directly, the group is treated as quasi-static while the rest of the
//! layout is pushed out of the way, and a final compaction integrates the
//! group back into normal flow.
//!
//! # Invariants
//!
//! 1. Relative offsets between group members are preserved exactly through
//!    target application (pre-compaction rigidity).
//! 2. The two compaction passes run in sorted layout order, so the result
//!    is deterministic for a given input.

use crate::collision::{collides, first_collision};
use crate::compact::{compact, sort_layout};
use crate::movement::{index_of, move_element_inner};
use gridflow_core::{CompactType, ItemId, LayoutError, LayoutItem};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

/// Target cell for one group member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMove {
    pub id: ItemId,
    pub x: u32,
    pub y: u32,
}

impl GroupMove {
    /// Create a target for `id`.
    pub fn new(id: impl Into<ItemId>, x: u32, y: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }
}

/// Relocate every item in `moves` simultaneously.
///
/// Targets are expected to already be group-consistent (the orchestrator
/// shifts the whole group uniformly back into bounds); each one is still
/// clamped to the grid defensively. With `prevent_collision`, a group
/// whose footprint would land on any non-member reverts entirely.
///
/// Fails fast with [`LayoutError::UnknownItem`] on any id not present.
pub fn move_elements(
    layout: &[LayoutItem],
    moves: &[GroupMove],
    is_user_action: bool,
    prevent_collision: bool,
    compact_type: CompactType,
    cols: u32,
) -> Result<Vec<LayoutItem>, LayoutError> {
    if moves.is_empty() {
        return Ok(layout.to_vec());
    }
    trace!(members = moves.len(), "group move");

    let mut working = layout.to_vec();
    let mut member_indices: Vec<usize> = Vec::with_capacity(moves.len());
    for mv in moves {
        member_indices.push(index_of(&working, &mv.id)?);
    }
    let members: FxHashSet<usize> = member_indices.iter().copied().collect();

    // Apply targets as a rigid block.
    for (mv, &idx) in moves.iter().zip(&member_indices) {
        let max_x = cols.saturating_sub(working[idx].w);
        working[idx].x = mv.x.min(max_x);
        working[idx].y = mv.y;
    }

    if prevent_collision {
        let hit = member_indices.iter().any(|&idx| {
            working
                .iter()
                .enumerate()
                .any(|(j, other)| !members.contains(&j) && collides(other, &working[idx]))
        });
        if hit {
            trace!("group move reverted, collision prevented");
            return Ok(layout.to_vec());
        }
    }

    // Quasi-static phase: pin the group, push displaced items away with
    // single-mover semantics, and let everything else compact around the
    // block.
    let saved_static: FxHashMap<ItemId, bool> = member_indices
        .iter()
        .map(|&idx| (working[idx].id.clone(), working[idx].is_static))
        .collect();
    for &idx in &member_indices {
        working[idx].is_static = true;
        working[idx].moved = true;
    }

    for &idx in &sorted_member_order(&working, &member_indices, compact_type) {
        let displaced: Vec<usize> = (0..working.len())
            .filter(|&j| {
                !members.contains(&j)
                    && !working[j].is_static
                    && !working[j].moved
                    && collides(&working[j], &working[idx])
            })
            .collect();
        for j in displaced {
            if !collides(&working[j], &working[idx]) {
                // An earlier push already cleared this overlap.
                continue;
            }
            push_displaced(&mut working, idx, j, is_user_action, compact_type, cols);
        }
    }

    let mut working = compact(&working, compact_type, cols);
    for item in &mut working {
        if let Some(&was_static) = saved_static.get(&item.id) {
            item.is_static = was_static;
        }
    }

    Ok(compact(&working, compact_type, cols))
}

/// Push one displaced non-member past the far edge of the member it
/// overlaps, cascading through the single-item mover. The member is static
/// for the duration, so the mover treats it as an obstacle that never
/// yields.
///
/// On a direct user action the free space on the near side of the block is
/// tried first, matching the single-mover preference.
fn push_displaced(
    working: &mut Vec<LayoutItem>,
    member: usize,
    displaced: usize,
    is_user_action: bool,
    compact_type: CompactType,
    cols: u32,
) {
    let horizontal = compact_type == CompactType::Horizontal;

    if is_user_action {
        let probe = LayoutItem::new(
            "__probe__",
            if horizontal {
                working[member].x.saturating_sub(working[displaced].w)
            } else {
                working[displaced].x
            },
            if horizontal {
                working[displaced].y
            } else {
                working[member].y.saturating_sub(working[displaced].h)
            },
            working[displaced].w,
            working[displaced].h,
        );
        if first_collision(working, &probe).is_none() {
            move_element_inner(
                working,
                displaced,
                horizontal.then_some(probe.x),
                (!horizontal).then_some(probe.y),
                false,
                false,
                compact_type,
                cols,
            );
            return;
        }
    }

    let (x, y) = if horizontal {
        (Some(working[member].right()), None)
    } else {
        (None, Some(working[member].bottom()))
    };
    move_element_inner(working, displaced, x, y, false, false, compact_type, cols);
}

/// Member indices in compaction sort order, for deterministic processing.
fn sorted_member_order(
    working: &[LayoutItem],
    member_indices: &[usize],
    compact_type: CompactType,
) -> Vec<usize> {
    let by_id: FxHashMap<&ItemId, usize> = working
        .iter()
        .enumerate()
        .map(|(i, item)| (&item.id, i))
        .collect();
    let members: FxHashSet<usize> = member_indices.iter().copied().collect();
    sort_layout(working, compact_type)
        .iter()
        .map(|item| by_id[&item.id])
        .filter(|idx| members.contains(idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridflow_core::CompactType::Vertical;

    fn find<'a>(layout: &'a [LayoutItem], id: &str) -> &'a LayoutItem {
        layout.iter().find(|i| i.id.as_str() == id).unwrap()
    }

    #[test]
    fn empty_group_is_a_no_op() {
        let layout = vec![LayoutItem::new("a", 0, 0, 1, 1)];
        let out = move_elements(&layout, &[], true, false, Vertical, 4).unwrap();
        assert_eq!(out, layout);
    }

    #[test]
    fn unknown_member_fails_fast() {
        let layout = vec![LayoutItem::new("a", 0, 0, 1, 1)];
        let err = move_elements(
            &layout,
            &[GroupMove::new("ghost", 1, 1)],
            true,
            false,
            Vertical,
            4,
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::UnknownItem { id: "ghost".into() });
    }

    #[test]
    fn group_keeps_relative_offsets_when_unobstructed() {
        let layout = vec![
            LayoutItem::new("a", 0, 0, 1, 1),
            LayoutItem::new("b", 1, 0, 1, 1),
        ];
        // Move both one column right; vertical compaction keeps x as-is.
        let moves = [GroupMove::new("a", 1, 0), GroupMove::new("b", 2, 0)];
        let out = move_elements(&layout, &moves, true, false, Vertical, 4).unwrap();
        let (a, b) = (find(&out, "a"), find(&out, "b"));
        assert_eq!((a.x, a.y), (1, 0));
        assert_eq!((b.x, b.y), (2, 0));
    }

    #[test]
    fn displaced_item_is_pushed_out_of_the_block() {
        let layout = vec![
            LayoutItem::new("a", 0, 0, 2, 1),
            LayoutItem::new("b", 0, 1, 2, 1),
            LayoutItem::new("c", 2, 0, 2, 1),
        ];
        // Drag the a+b column onto c.
        let moves = [GroupMove::new("a", 2, 0), GroupMove::new("b", 2, 1)];
        let out = move_elements(&layout, &moves, true, false, Vertical, 4).unwrap();
        let (a, b, c) = (find(&out, "a"), find(&out, "b"), find(&out, "c"));
        assert_eq!((a.x, a.y), (2, 0));
        assert_eq!((b.x, b.y), (2, 1));
        // c flowed around the block.
        assert!(!collides(c, a));
        assert!(!collides(c, b));
    }

    #[test]
    fn prevent_collision_reverts_whole_group() {
        let layout = vec![
            LayoutItem::new("a", 0, 0, 2, 1),
            LayoutItem::new("b", 0, 1, 2, 1),
            LayoutItem::new("c", 2, 0, 2, 1),
        ];
        let moves = [GroupMove::new("a", 2, 0), GroupMove::new("b", 2, 1)];
        let out = move_elements(&layout, &moves, true, true, Vertical, 4).unwrap();
        assert_eq!(out, layout);
    }

    #[test]
    fn member_static_flags_are_restored() {
        let layout = vec![
            LayoutItem::new("a", 0, 0, 1, 1),
            LayoutItem::new("b", 1, 0, 1, 1),
        ];
        let moves = [GroupMove::new("a", 0, 2), GroupMove::new("b", 1, 2)];
        let out = move_elements(&layout, &moves, true, false, Vertical, 4).unwrap();
        assert!(out.iter().all(|item| !item.is_static));
        assert!(out.iter().all(|item| !item.moved));
    }

    #[test]
    fn no_overlaps_after_group_move() {
        let layout = vec![
            LayoutItem::new("a", 0, 0, 2, 2),
            LayoutItem::new("b", 2, 0, 2, 2),
            LayoutItem::new("c", 0, 2, 2, 2),
            LayoutItem::new("d", 2, 2, 2, 2),
        ];
        let moves = [GroupMove::new("a", 1, 1), GroupMove::new("b", 3, 1)];
        let out = move_elements(&layout, &moves, true, false, Vertical, 4).unwrap();
        for i in &out {
            for j in &out {
                assert!(!collides(i, j), "{} overlaps {}", i.id, j.id);
            }
        }
    }
}
