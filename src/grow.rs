//! Greedy hole-free region growth

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::{neighbors4, CellGrid};
use crate::holes::hole_free;
use crate::region::Region;

/// Heap entry: a frontier cell and the marginal cost it was pushed with.
/// The heap cannot decrease keys, so an entry whose recorded cost no longer
/// matches the live marginal cost is dropped on pop; a fresh entry was
/// pushed when the cell's neighborhood last changed.
#[derive(Debug, PartialEq)]
struct Candidate {
    delta: f64,
    cell: (usize, usize),
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .delta
            .partial_cmp(&self.delta)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cost change from adding `cell`: the perimeter delta plus the cell's
/// binned weight.
fn marginal(region: &Region, grid: &CellGrid, cell: (usize, usize)) -> f64 {
    region.edge_delta(cell) as f64 * grid.cell_size() + grid.stats(cell).weight
}

/// Grow a connected, hole-free region outward from the cheapest single-cell
/// seed, admitting the cheapest frontier cell each round and recording the
/// cheapest prefix whose coverage reaches `k`.
///
/// Returns `None` when the grid holds no points or no prefix ever covers
/// `k`. Once a valid prefix exists, growth stops after `stall_window`
/// admissions without improvement, or when the heap runs dry.
pub fn grow(grid: &CellGrid, k: usize, stall_window: usize) -> Option<Region> {
    let s = grid.cell_size();
    let split = grid.split();

    // Cheapest one-cell region, ties broken toward the lowest coordinates.
    let (seed, seed_stats) = grid.cells().min_by(|&(ca, sa), &(cb, sb)| {
        let cost_a = 4.0 * s + sa.weight;
        let cost_b = 4.0 * s + sb.weight;
        cost_a
            .partial_cmp(&cost_b)
            .unwrap_or(Ordering::Equal)
            .then_with(|| ca.cmp(&cb))
    })?;

    let mut region = Region::new(split);
    region.add(seed, seed_stats);

    let mut heap = BinaryHeap::new();
    for n in neighbors4(seed, split) {
        heap.push(Candidate {
            delta: marginal(&region, grid, n),
            cell: n,
        });
    }

    let mut best: Option<Region> = None;
    let mut best_cost = f64::INFINITY;
    if region.coverage() >= k {
        best_cost = region.cost(s);
        best = Some(region.clone());
    }
    let mut since_improved = 0usize;

    while let Some(Candidate { delta, cell }) = heap.pop() {
        if region.contains(cell) {
            continue;
        }
        if delta != marginal(&region, grid, cell) {
            continue; // stale
        }
        // Admitting a cell that seals off empty cells would create a hole.
        if !hole_free(split, region.len() + 1, |c| c == cell || region.contains(c)) {
            continue;
        }

        region.add(cell, grid.stats(cell));
        for n in neighbors4(cell, split) {
            if !region.contains(n) {
                heap.push(Candidate {
                    delta: marginal(&region, grid, n),
                    cell: n,
                });
            }
        }

        if region.coverage() >= k && region.cost(s) < best_cost {
            best_cost = region.cost(s);
            best = Some(region.clone());
            since_improved = 0;
        } else if best.is_some() {
            since_improved += 1;
            if since_improved >= stall_window {
                break;
            }
        }
    }

    best
}
