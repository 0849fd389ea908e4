//! Split-sweep solver driver

use serde::{Deserialize, Serialize};

use crate::anneal::{refine, AnnealConfig};
use crate::boundary::{trace, Edge};
use crate::grid::CellGrid;
use crate::grow::grow;
use crate::region::Region;
use crate::rng::Rng;
use crate::{Error, Point, Result};

/// Sweep sizing and budgets. Defaults match the production tuning; tests
/// and configs scale them down.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Largest grid split tried; the sweep covers `1..=max_split`.
    pub max_split: usize,
    /// Trials per split for splits 2..=9.
    pub trials_small: usize,
    /// Trials per split for splits 10..=19.
    pub trials_medium: usize,
    /// Trials per split otherwise.
    pub trials_large: usize,
    /// Greedy admissions tolerated without improvement once coverage is met.
    pub stall_window: usize,
    pub anneal: AnnealConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_split: 110,
            trials_small: 80,
            trials_medium: 20,
            trials_large: 1,
            stall_window: 200,
            anneal: AnnealConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Load overrides from a JSON file; absent fields keep their defaults.
    pub fn load(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| Error::InvalidInput(format!("config: {}", e)))
    }

    fn trials(&self, split: usize) -> usize {
        match split {
            2..=9 => self.trials_small,
            10..=19 => self.trials_medium,
            _ => self.trials_large,
        }
    }
}

/// Final solver output: polygon cost, enclosed point count, and the closed
/// clockwise edge list.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub cost: f64,
    pub enclosed: usize,
    pub edges: Vec<Edge>,
}

/// Sweep grid splits and jittered trials, growing then refining a region
/// per trial, and keep the cheapest resulting polygon.
///
/// The reported cost is recomputed from the emitted polygon: perimeter plus
/// the weights of every input point lying inside or on it.
pub fn solve(points: &[Point], k: usize, cfg: &SolverConfig, seed: u64) -> Result<Solution> {
    if points.is_empty() {
        return Err(Error::InvalidInput("instance has no points".into()));
    }
    if k == 0 {
        return Err(Error::InvalidInput("coverage target must be at least 1".into()));
    }
    if k > points.len() {
        return Err(Error::Infeasible(format!(
            "coverage target {} exceeds point count {}",
            k,
            points.len()
        )));
    }

    let mut best: Option<Solution> = None;
    for split in 1..=cfg.max_split {
        for trial in 0..cfg.trials(split) {
            let mut rng = trial_rng(seed, split, trial);
            let eps = if split > 4 { 0.01 / split as f64 } else { 5e-4 };
            let jitter = 1.0 - eps * rng.random();
            let grid = CellGrid::build(points, split, jitter);

            let Some(grown) = grow(&grid, k, cfg.stall_window) else {
                continue;
            };
            let refined = refine(&grown, &grid, k, &cfg.anneal, &mut rng);

            let (enclosed, weight) = enclosed_points(points, &refined, &grid);
            let cost = refined.perimeter(grid.cell_size()) + weight;
            if best.as_ref().map_or(true, |b| cost < b.cost) {
                best = Some(Solution {
                    cost,
                    enclosed,
                    edges: trace(&refined, grid.cell_size()),
                });
            }
        }
    }

    best.ok_or_else(|| Error::Infeasible("no trial reached the coverage target".into()))
}

fn trial_rng(seed: u64, split: usize, trial: usize) -> Rng {
    Rng::new(seed ^ ((split as u64) << 32) ^ trial as u64)
}

/// Count and total weight of the points enclosed by the region's polygon.
///
/// A point is enclosed when it lies inside or on the extent of some region
/// cell. Points the builder clamped into the last row/column stay with
/// their bin cell even when the jittered grid ends just short of them,
/// keeping the reported count consistent with the coverage constraint.
fn enclosed_points(points: &[Point], region: &Region, grid: &CellGrid) -> (usize, f64) {
    let mut count = 0;
    let mut weight = 0.0;
    for p in points {
        if in_region(p, region, grid) || region.contains(grid.bin(p.x, p.y)) {
            count += 1;
            weight += p.w;
        }
    }
    (count, weight)
}

fn in_region(p: &Point, region: &Region, grid: &CellGrid) -> bool {
    let s = grid.cell_size();
    let split = grid.split() as i64;
    let fi = (p.x / s).floor() as i64;
    let fj = (p.y / s).floor() as i64;
    // A point on a cell edge belongs to every adjacent cell's extent.
    for i in [fi - 1, fi] {
        for j in [fj - 1, fj] {
            if i < 0 || j < 0 || i >= split || j >= split {
                continue;
            }
            let cell = (i as usize, j as usize);
            if region.contains(cell)
                && p.x >= i as f64 * s
                && p.x <= (i + 1) as f64 * s
                && p.y >= j as f64 * s
                && p.y <= (j + 1) as f64 * s
            {
                return true;
            }
        }
    }
    false
}
