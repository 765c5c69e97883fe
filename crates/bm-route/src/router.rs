//! Routing trait and default A* implementation.
//!
//! # Pluggability
//!
//! Callers route through the [`Router`] trait, so applications can swap in
//! custom implementations (contraction hierarchies, traffic-aware costs)
//! without touching coordinate snapping.  The default [`AStarRouter`] runs
//! one [`AStarSolver`] per query.
//!
//! # Units
//!
//! Distances are great-circle **metres** (`f64`).  Time budgets are
//! wall-clock [`Duration`]s.

use std::time::Duration;

use bm_core::{GeoPoint, NodeId, RoutingConfig};
use bm_search::{AStarSolver, ShortestPathsSolver, SolverOutcome};

use crate::network::StreetGraph;
use crate::{RouteError, RouteResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone)]
pub struct Route {
    /// Vertices from source to the last vertex reached.  Ends at the
    /// destination only when `outcome` is `Solved`; empty when `Unsolvable`.
    pub nodes: Vec<NodeId>,
    /// How the search ended.
    pub outcome: SolverOutcome,
    /// Length of `nodes` as a path in metres; infinite when `Unsolvable`.
    pub distance_m: f64,
    /// Vertices expanded by the search.
    pub states_explored: usize,
}

impl Route {
    /// `true` if the destination was reached.
    pub fn is_solved(&self) -> bool {
        self.outcome == SolverOutcome::Solved
    }

    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.is_solved() && self.nodes.len() == 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve concurrent
/// queries; any per-query search state belongs inside [`route`](Self::route).
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// An unreachable destination or a spent budget is reported through
    /// [`Route::outcome`]; errors are reserved for invalid input.
    fn route(&self, graph: &StreetGraph, from: NodeId, to: NodeId) -> RouteResult<Route>;
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* over great-circle edge lengths with a great-circle heuristic.
#[derive(Clone, Debug)]
pub struct AStarRouter {
    /// Per-query search budget.
    pub timeout: Duration,
}

impl AStarRouter {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Router using `config.timeout`.
    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(config.timeout)
    }

    /// Router with a budget in fractional seconds.  Rejects negative or NaN.
    pub fn with_timeout_secs(secs: f64) -> RouteResult<Self> {
        let config = RoutingConfig::from_secs(secs, None)?;
        Ok(Self::from_config(&config))
    }
}

impl Default for AStarRouter {
    fn default() -> Self {
        Self::from_config(&RoutingConfig::default())
    }
}

impl Router for AStarRouter {
    fn route(&self, graph: &StreetGraph, from: NodeId, to: NodeId) -> RouteResult<Route> {
        for node in [from, to] {
            if !graph.contains(node) {
                return Err(RouteError::NodeNotFound(node));
            }
        }

        let solver = AStarSolver::new(graph, from, to, self.timeout);
        if solver.outcome() != SolverOutcome::Solved {
            log::debug!("route {from} -> {to}: {}", solver.outcome());
        }

        Ok(Route {
            outcome:         solver.outcome(),
            distance_m:      solver.solution_weight(),
            states_explored: solver.num_states_explored(),
            nodes:           solver.into_solution(),
        })
    }
}

// ── Coordinate queries ────────────────────────────────────────────────────────

/// Snap `start` and `dest` to their closest vertices and route between them.
pub fn shortest_path<R: Router + ?Sized>(
    router: &R,
    graph:  &StreetGraph,
    start:  GeoPoint,
    dest:   GeoPoint,
) -> RouteResult<Route> {
    let from = graph.snap(start)?;
    let to = graph.snap(dest)?;
    router.route(graph, from, to)
}

/// Route many `(start, dest)` pairs.  Results keep the order of `queries`.
///
/// With the `parallel` feature the queries run on the Rayon pool; each one
/// owns its own solver and reads the shared graph.
pub fn route_batch<R: Router + ?Sized>(
    router:  &R,
    graph:   &StreetGraph,
    queries: &[(GeoPoint, GeoPoint)],
) -> Vec<RouteResult<Route>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        queries
            .par_iter()
            .map(|&(start, dest)| shortest_path(router, graph, start, dest))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        queries
            .iter()
            .map(|&(start, dest)| shortest_path(router, graph, start, dest))
            .collect()
    }
}
