//! Benchmarks for the layout solvers
//!
//! Run with: cargo bench -p gridflow-engine

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridflow_engine::{
    CompactType, GroupMove, LayoutItem, compact, diff_layouts, move_element, move_elements,
};
use std::hint::black_box;

const COLS: u32 = 12;

/// Build a scattered layout of `n` items with deterministic but uneven
/// positions, so compaction has real work to do.
fn make_layout(n: usize) -> Vec<LayoutItem> {
    (0..n)
        .map(|i| {
            let w = 1 + (i % 3) as u32;
            let x = ((i * 5) as u32 % COLS).min(COLS - w);
            let y = ((i * 7) % 40) as u32;
            let h = 1 + (i % 2) as u32;
            LayoutItem::new(format!("item-{i}"), x, y, w, h)
        })
        .collect()
}

/// Same shape, but every fifth item is pinned.
fn make_layout_with_statics(n: usize) -> Vec<LayoutItem> {
    make_layout(n)
        .into_iter()
        .enumerate()
        .map(|(i, item)| if i % 5 == 0 { item.with_static(true) } else { item })
        .collect()
}

fn bench_compact(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/compact");

    for n in [10usize, 50, 200] {
        let layout = make_layout(n);
        for (name, ct) in [
            ("vertical", CompactType::Vertical),
            ("horizontal", CompactType::Horizontal),
        ] {
            group.bench_with_input(BenchmarkId::new(name, n), &layout, |b, layout| {
                b.iter(|| black_box(compact(black_box(layout), ct, COLS)))
            });
        }
    }

    // Pinned items force the push-resolution path.
    let pinned = make_layout_with_statics(50);
    group.bench_with_input(
        BenchmarkId::new("vertical_with_statics", 50),
        &pinned,
        |b, layout| b.iter(|| black_box(compact(black_box(layout), CompactType::Vertical, COLS))),
    );

    group.finish();
}

fn bench_move_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/move_element");

    for n in [10usize, 50, 200] {
        // Start from a settled layout and drop the first item into the
        // middle of the pack: the worst-case cascade.
        let layout = compact(&make_layout(n), CompactType::Vertical, COLS);
        let id = layout[0].id.clone();
        group.bench_with_input(BenchmarkId::new("cascade", n), &layout, |b, layout| {
            b.iter_batched(
                || layout.to_vec(),
                |layout| {
                    let moved =
                        move_element(&layout, &id, 4, 6, true, false, CompactType::Vertical, COLS)
                            .unwrap();
                    black_box(compact(&moved, CompactType::Vertical, COLS))
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_move_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/move_group");

    let layout = compact(&make_layout(50), CompactType::Vertical, COLS);
    let moves: Vec<GroupMove> = layout
        .iter()
        .take(4)
        .map(|item| GroupMove::new(item.id.clone(), item.x, item.y + 5))
        .collect();

    group.bench_function("four_members_of_50", |b| {
        b.iter(|| {
            black_box(
                move_elements(&layout, &moves, true, false, CompactType::Vertical, COLS).unwrap(),
            )
        })
    });

    group.finish();
}

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/diff");

    let old = compact(&make_layout(200), CompactType::Vertical, COLS);
    let new = {
        let moved = move_element(&old, &old[0].id, 4, 6, true, false, CompactType::Vertical, COLS)
            .unwrap();
        compact(&moved, CompactType::Vertical, COLS)
    };

    group.bench_function("diff_200", |b| {
        b.iter(|| black_box(diff_layouts(black_box(&old), black_box(&new))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compact,
    bench_move_element,
    bench_move_group,
    bench_diff,
);

criterion_main!(benches);
