//! Simulated-annealing refinement of a valid region

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::grid::CellGrid;
use crate::holes::hole_free;
use crate::region::{is_connected, Region};
use crate::rng::Rng;

/// Annealing schedule and budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealConfig {
    /// Wall-clock budget in seconds, polled once per iteration.
    pub time_budget_secs: f64,
    pub max_iter: usize,
    pub initial_temp: f64,
    pub final_temp: f64,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            time_budget_secs: 0.30,
            max_iter: 5000,
            initial_temp: 5.0,
            final_temp: 0.05,
        }
    }
}

/// Geometric cooling: `T(t) = T₀ · exp(−βt)` with `β = ln(T₀/T_f) / N`.
fn temperature(cfg: &AnnealConfig, iter: usize) -> f64 {
    let beta = (cfg.initial_temp / cfg.final_temp).ln() / cfg.max_iter as f64;
    (cfg.initial_temp * (-beta * iter as f64).exp()).max(cfg.final_temp)
}

/// Metropolis criterion: accept improvements outright, a worsening of
/// `delta` with probability `exp(−delta / temp)`.
fn metropolis(delta: f64, temp: f64, rng: &mut Rng) -> bool {
    delta <= 0.0 || rng.random() < (-delta / temp).exp()
}

/// Refine `start` with border-biased add/remove flips, keeping the region
/// connected, hole-free, and at or above coverage `k` throughout.
///
/// A proposal that fails a precondition or the Metropolis draw still
/// advances the iteration counter and the temperature. Returns the best
/// region seen, which is never worse than `start`.
pub fn refine(
    start: &Region,
    grid: &CellGrid,
    k: usize,
    cfg: &AnnealConfig,
    rng: &mut Rng,
) -> Region {
    let s = grid.cell_size();
    let split = grid.split();
    let budget = Duration::from_secs_f64(cfg.time_budget_secs);
    let started = Instant::now();

    let mut region = start.clone();
    let mut best = start.clone();
    let mut best_cost = best.cost(s);
    // The border only changes on accepted moves; keep a drawable copy,
    // sorted so proposals do not depend on hash iteration order.
    let mut border: Vec<(usize, usize)> = region.border().iter().copied().collect();
    border.sort_unstable();

    for iter in 0..cfg.max_iter {
        if started.elapsed() >= budget {
            break;
        }
        let temp = temperature(cfg, iter);

        let Some(&block) = rng.pick(&border) else {
            break;
        };
        let (di, dj) = rng.step();
        let ci = block.0 as i64 + di as i64;
        let cj = block.1 as i64 + dj as i64;
        if ci < 0 || cj < 0 || ci >= split as i64 || cj >= split as i64 {
            continue;
        }
        let cell = (ci as usize, cj as usize);
        let stats = grid.stats(cell);

        if region.contains(cell) {
            // Removal flip. The drawn border block keeps the remainder
            // non-empty and adjacent, but connectivity is verified in full.
            if region.len() == 1 || region.coverage() - stats.count < k {
                continue;
            }
            let mut remainder = region.cells().clone();
            remainder.remove(&cell);
            if !is_connected(&remainder, split) {
                continue;
            }
            if !hole_free(split, region.len() - 1, |c| c != cell && region.contains(c)) {
                continue;
            }
            let delta = -(region.edge_delta(cell) as f64 * s + stats.weight);
            if !metropolis(delta, temp, rng) {
                continue;
            }
            region.remove(cell, stats);
        } else {
            // Addition flip; adjacency to the drawn border block is given.
            if !hole_free(split, region.len() + 1, |c| c == cell || region.contains(c)) {
                continue;
            }
            let delta = region.edge_delta(cell) as f64 * s + stats.weight;
            if !metropolis(delta, temp, rng) {
                continue;
            }
            region.add(cell, stats);
        }

        border = region.border().iter().copied().collect();
        border.sort_unstable();
        let cost = region.cost(s);
        if cost < best_cost {
            best_cost = cost;
            best = region.clone();
        }
    }

    best
}
