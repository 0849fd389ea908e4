//! Point binning onto a regular cell grid

use std::collections::HashMap;

use crate::Point;

/// Aggregate of the points binned into one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellStats {
    pub weight: f64,
    pub count: usize,
}

/// Regular `split × split` partition of the input domain.
///
/// Only non-empty cells are stored. `cell_size` is the world-space side
/// length of one cell; a point `(x, y)` bins into `(⌊x/s⌋, ⌊y/s⌋)`, with
/// the right/top domain boundary clamped into the last row/column.
#[derive(Debug, Clone)]
pub struct CellGrid {
    split: usize,
    cell_size: f64,
    cells: HashMap<(usize, usize), CellStats>,
    total_count: usize,
}

impl CellGrid {
    /// Bin `points` into a `split × split` grid. `jitter` in `(0, 1]`
    /// shrinks the cell size slightly so repeated trials see different bin
    /// layouts.
    #[must_use]
    pub fn build(points: &[Point], split: usize, jitter: f64) -> Self {
        let max_coord = points
            .iter()
            .map(|p| p.x.max(p.y))
            .fold(0.0_f64, f64::max);
        // All points at the origin still need a positive cell size.
        let cell_size = if max_coord > 0.0 {
            max_coord / split as f64 * jitter
        } else {
            1.0
        };

        let mut cells: HashMap<(usize, usize), CellStats> = HashMap::new();
        for p in points {
            let stats = cells.entry(bin(p.x, p.y, cell_size, split)).or_default();
            stats.weight += p.w;
            stats.count += 1;
        }

        Self {
            split,
            cell_size,
            cells,
            total_count: points.len(),
        }
    }

    #[must_use]
    #[inline]
    pub fn split(&self) -> usize {
        self.split
    }

    #[must_use]
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Total number of binned points.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Aggregate for `cell`; zero for cells holding no points.
    #[must_use]
    pub fn stats(&self, cell: (usize, usize)) -> CellStats {
        self.cells.get(&cell).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Non-empty cells with their aggregates, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), CellStats)> + '_ {
        self.cells.iter().map(|(&cell, &stats)| (cell, stats))
    }

    /// Cell a point bins into, boundary clamped inward.
    #[must_use]
    pub fn bin(&self, x: f64, y: f64) -> (usize, usize) {
        bin(x, y, self.cell_size, self.split)
    }
}

fn bin(x: f64, y: f64, cell_size: f64, split: usize) -> (usize, usize) {
    let i = ((x / cell_size).floor() as usize).min(split - 1);
    let j = ((y / cell_size).floor() as usize).min(split - 1);
    (i, j)
}

/// 4-directional neighbors of `cell` within a `split × split` grid.
pub fn neighbors4(cell: (usize, usize), split: usize) -> impl Iterator<Item = (usize, usize)> {
    let (i, j) = cell;
    let mut n = Vec::with_capacity(4);
    if i > 0 { n.push((i - 1, j)); }
    if i + 1 < split { n.push((i + 1, j)); }
    if j > 0 { n.push((i, j - 1)); }
    if j + 1 < split { n.push((i, j + 1)); }
    n.into_iter()
}
