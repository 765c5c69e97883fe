//! `bm-search` — best-first shortest-path search over abstract graphs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`graph`]    | `AStarGraph` capability trait, `WeightedEdge`              |
//! | [`solver`]   | `AStarSolver`, `ShortestPathsSolver`, `SolverOutcome`      |
//!
//! # Usage
//!
//! Implement [`AStarGraph`] for your vertex type, then construct one
//! [`AStarSolver`] per query.  The search runs to completion inside the
//! constructor; the solver value is the read-only result.
//!
//! ```
//! use std::time::Duration;
//! use bm_search::{AStarGraph, AStarSolver, ShortestPathsSolver, SolverOutcome, WeightedEdge};
//!
//! struct Line;
//!
//! impl AStarGraph<u32> for Line {
//!     fn neighbors(&self, v: &u32, buf: &mut Vec<WeightedEdge<u32>>) {
//!         if *v < 3 {
//!             buf.push(WeightedEdge::new(*v, v + 1, 1.0));
//!         }
//!     }
//!     fn estimated_distance_to_goal(&self, v: &u32, goal: &u32) -> f64 {
//!         goal.abs_diff(*v) as f64
//!     }
//! }
//!
//! let solver = AStarSolver::new(&Line, 0, 3, Duration::from_secs(1));
//! assert_eq!(solver.outcome(), SolverOutcome::Solved);
//! assert_eq!(solver.solution(), &[0, 1, 2, 3]);
//! assert_eq!(solver.solution_weight(), 3.0);
//! ```

pub mod graph;
pub mod solver;

#[cfg(test)]
mod tests;

pub use graph::{AStarGraph, WeightedEdge};
pub use solver::{AStarSolver, ShortestPathsSolver, SolverOutcome};
