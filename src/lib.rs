//! # zoneplan
//!
//! Heuristic solver for the minimum-cost rectilinear enclosure problem:
//! given weighted sites in the plane and a coverage target `K`, find a
//! simply-connected axis-aligned polygon enclosing at least `K` sites that
//! minimizes perimeter plus enclosed weight. Negative weights make
//! enclosure attractive; the solver trades them against fence length.
//!
//! ## Quick Start
//!
//! ```rust
//! use zoneplan::{solve, AnnealConfig, Point, SolverConfig};
//!
//! let points = vec![
//!     Point::new(2.0, 2.0, -3.0),
//!     Point::new(3.0, 2.0, -1.0),
//!     Point::new(9.0, 8.0, 4.0),
//! ];
//! let cfg = SolverConfig {
//!     max_split: 6,
//!     trials_small: 2,
//!     anneal: AnnealConfig { max_iter: 300, ..AnnealConfig::default() },
//!     ..SolverConfig::default()
//! };
//! let solution = solve(&points, 2, &cfg, 7).unwrap();
//! assert!(solution.enclosed >= 2);
//! ```
//!
//! ## Pipeline
//!
//! One trial bins the sites onto a jittered grid ([`CellGrid`]), grows a
//! connected hole-free region under a marginal-cost heap ([`grow`]),
//! refines it with time-budgeted simulated annealing ([`refine`]), and
//! extracts the clockwise outer boundary ([`trace`]). The driver
//! ([`solve`]) sweeps grid resolutions and trial counts and keeps the
//! cheapest polygon.
//!
//! ## Validation
//!
//! [`constraints`] checks the structural invariants every produced region
//! and polygon must satisfy: connectivity, hole-freeness, rectilinearity,
//! and clockwise orientation.

mod anneal;
mod boundary;
mod error;
mod grid;
mod grow;
mod holes;
mod point;
mod region;
mod rng;
mod solver;

pub mod constraints;
pub mod io;

pub use anneal::{refine, AnnealConfig};
pub use boundary::{trace, Edge};
pub use error::{Error, Result};
pub use grid::{neighbors4, CellGrid, CellStats};
pub use grow::grow;
pub use holes::hole_free;
pub use point::Point;
pub use region::{is_connected, Region};
pub use rng::Rng;
pub use solver::{solve, Solution, SolverConfig};
