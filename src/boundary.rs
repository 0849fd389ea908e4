//! Clockwise boundary extraction

use std::collections::BTreeMap;

use crate::region::Region;

/// One axis-aligned polygon edge in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Edge {
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).abs() + (self.y2 - self.y1).abs()
    }
}

/// Extract the outer boundary of a connected, hole-free region as a closed
/// clockwise edge list with collinear runs collapsed.
///
/// Corner arithmetic stays in integer grid coordinates; world coordinates
/// appear only at emission, scaled by `cell_size`. With the y-axis pointing
/// up, clockwise means each exposed side is directed per its owning cell:
/// top left→right, right top→bottom, bottom right→left, left bottom→top.
#[must_use]
pub fn trace(region: &Region, cell_size: f64) -> Vec<Edge> {
    if region.is_empty() {
        return Vec::new();
    }

    // Directed exposed unit edges, keyed by start corner. Simplicity rules
    // out pinch vertices, so every start corner is unique.
    let mut segments: BTreeMap<(i64, i64), (i64, i64)> = BTreeMap::new();
    for &(i, j) in region.cells() {
        let (i, j) = (i as i64, j as i64);
        let absent = |di: i64, dj: i64| {
            let (ni, nj) = (i + di, j + dj);
            ni < 0 || nj < 0 || !region.contains((ni as usize, nj as usize))
        };
        if absent(0, 1) {
            segments.insert((i, j + 1), (i + 1, j + 1));
        }
        if absent(1, 0) {
            segments.insert((i + 1, j + 1), (i + 1, j));
        }
        if absent(0, -1) {
            segments.insert((i + 1, j), (i, j));
        }
        if absent(-1, 0) {
            segments.insert((i, j), (i, j + 1));
        }
    }

    // Walk head-to-tail from the lexicographically smallest corner, which
    // is a convex vertex of the polygon, so the loop seam never splits a
    // straight run.
    let Some((&start, _)) = segments.iter().next() else {
        return Vec::new();
    };
    let mut path = Vec::with_capacity(segments.len());
    let mut cur = start;
    for _ in 0..segments.len() {
        path.push(cur);
        match segments.get(&cur) {
            Some(&next) => cur = next,
            None => return Vec::new(),
        }
        if cur == start {
            break;
        }
    }

    // Keep only corners where the walk turns; consecutive collinear unit
    // edges merge into one polygon edge.
    let n = path.len();
    let mut vertices: Vec<(i64, i64)> = Vec::new();
    for idx in 0..n {
        let prev = path[(idx + n - 1) % n];
        let here = path[idx];
        let next = path[(idx + 1) % n];
        if direction(prev, here) != direction(here, next) {
            vertices.push(here);
        }
    }

    let m = vertices.len();
    let mut edges = Vec::with_capacity(m);
    for idx in 0..m {
        let a = vertices[idx];
        let b = vertices[(idx + 1) % m];
        edges.push(Edge {
            x1: a.0 as f64 * cell_size,
            y1: a.1 as f64 * cell_size,
            x2: b.0 as f64 * cell_size,
            y2: b.1 as f64 * cell_size,
        });
    }
    edges
}

fn direction(a: (i64, i64), b: (i64, i64)) -> (i64, i64) {
    ((b.0 - a.0).signum(), (b.1 - a.1).signum())
}
