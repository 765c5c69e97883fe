//! A* solver and its result surface.
//!
//! # Search state
//!
//! One construction owns three structures, all dropped when it returns:
//!
//! - `dist`: best known distance from the start.  A vertex has an entry iff
//!   it has been discovered; absent means +∞.
//! - `edge_to`: the edge that reached each vertex on its current best path.
//!   The start never gets an entry, which is what ends path reconstruction.
//! - the priority queue: discovered vertices not yet removed as smallest,
//!   keyed by `dist + heuristic`.
//!
//! # Termination
//!
//! The loop stops when the queue is empty, when its minimum is the goal, or
//! when the time budget is spent (checked once per expansion).  The queue
//! minimum at that point is the terminal vertex: the goal when solved, the
//! most promising frontier vertex on timeout.

use std::fmt;
use std::hash::Hash;
use std::time::Duration;

use rustc_hash::FxHashMap;

use bm_core::Stopwatch;
use bm_pq::{ArrayHeapMinPq, ExtrinsicMinPq};

use crate::graph::{AStarGraph, WeightedEdge};

// ── SolverOutcome ─────────────────────────────────────────────────────────────

/// Terminal classification of a search.  None of these is an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SolverOutcome {
    /// The goal was reached; the path is optimal under a consistent heuristic.
    Solved,
    /// The budget ran out; the path leads to the best frontier vertex.
    Timeout,
    /// The goal is not reachable from the start.
    Unsolvable,
}

impl fmt::Display for SolverOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolverOutcome::Solved => "solved",
            SolverOutcome::Timeout => "timeout",
            SolverOutcome::Unsolvable => "unsolvable",
        };
        f.write_str(s)
    }
}

// ── ShortestPathsSolver ───────────────────────────────────────────────────────

/// Read-only result surface of a completed shortest-path search.
pub trait ShortestPathsSolver<V> {
    fn outcome(&self) -> SolverOutcome;

    /// Vertices from start to the terminal vertex.  Empty when unsolvable.
    fn solution(&self) -> &[V];

    /// Total weight of [`solution`](Self::solution); `f64::INFINITY` when
    /// unsolvable.
    ///
    /// On timeout this is the distance to the terminal frontier vertex, so it
    /// always matches the partial path.  It is not the best known distance to
    /// the goal, which may be unset or belong to a different path.
    fn solution_weight(&self) -> f64;

    /// Number of vertices removed from the queue and expanded.
    fn num_states_explored(&self) -> usize;

    /// Wall-clock time spent in the search loop.
    fn exploration_time(&self) -> Duration;
}

// ── AStarSolver ───────────────────────────────────────────────────────────────

/// The result of one A* search from `start` to `goal`.
#[derive(Clone, Debug)]
pub struct AStarSolver<V> {
    outcome:          SolverOutcome,
    solution:         Vec<V>,
    solution_weight:  f64,
    num_states:       usize,
    exploration_time: Duration,
}

impl<V: Clone + Eq + Hash> AStarSolver<V> {
    /// Search `graph` from `start` to `goal` within `timeout`, using an
    /// [`ArrayHeapMinPq`].
    pub fn new<G>(graph: &G, start: V, goal: V, timeout: Duration) -> Self
    where
        G: AStarGraph<V> + ?Sized,
    {
        Self::with_queue(ArrayHeapMinPq::new(), graph, start, goal, timeout)
    }

    /// Same search over a caller-supplied queue.
    ///
    /// # Panics
    /// Panics if `pq` is not empty.
    pub fn with_queue<Q, G>(mut pq: Q, graph: &G, start: V, goal: V, timeout: Duration) -> Self
    where
        Q: ExtrinsicMinPq<V>,
        G: AStarGraph<V> + ?Sized,
    {
        assert!(pq.is_empty(), "solver queue must start empty");

        let mut dist: FxHashMap<V, f64> = FxHashMap::default();
        let mut edge_to: FxHashMap<V, WeightedEdge<V>> = FxHashMap::default();

        pq.add(start.clone(), graph.estimated_distance_to_goal(&start, &goal));
        dist.insert(start, 0.0);

        let timer = Stopwatch::start();
        let mut num_states = 0usize;
        let mut nbuf: Vec<WeightedEdge<V>> = Vec::new();

        loop {
            match pq.get_smallest() {
                None => break,
                Some(smallest) if *smallest == goal => break,
                Some(_) if !timer.within(timeout) => break,
                Some(_) => {}
            }
            let Some(current) = pq.remove_smallest() else {
                break;
            };
            num_states += 1;

            let current_dist = dist.get(&current).copied().unwrap_or(f64::INFINITY);

            nbuf.clear();
            graph.neighbors(&current, &mut nbuf);
            log::trace!("expand #{num_states}: dist {current_dist}, {} out-edges", nbuf.len());

            for edge in nbuf.drain(..) {
                let candidate = current_dist + edge.weight();
                let known = dist.get(edge.to()).copied().unwrap_or(f64::INFINITY);
                if candidate >= known {
                    continue;
                }

                let next = edge.to().clone();
                let priority = candidate + graph.estimated_distance_to_goal(&next, &goal);
                dist.insert(next.clone(), candidate);
                edge_to.insert(next.clone(), edge);

                if pq.contains(&next) {
                    pq.change_priority(&next, priority);
                } else {
                    pq.add(next, priority);
                }
            }
        }

        let exploration_time = timer.elapsed();

        let result = match pq.get_smallest() {
            None => Self {
                outcome: SolverOutcome::Unsolvable,
                solution: Vec::new(),
                solution_weight: f64::INFINITY,
                num_states,
                exploration_time,
            },
            Some(terminal) => {
                let outcome = if *terminal == goal {
                    SolverOutcome::Solved
                } else {
                    SolverOutcome::Timeout
                };
                Self {
                    outcome,
                    solution_weight: dist.get(terminal).copied().unwrap_or(f64::INFINITY),
                    solution: reconstruct(&edge_to, terminal.clone()),
                    num_states,
                    exploration_time,
                }
            }
        };

        log::debug!(
            "A* {}: {} vertices, weight {}, {} states in {:?}",
            result.outcome,
            result.solution.len(),
            result.solution_weight,
            result.num_states,
            result.exploration_time,
        );
        result
    }

    /// `true` if the goal was reached.
    pub fn is_solved(&self) -> bool {
        self.outcome == SolverOutcome::Solved
    }

    /// Consume the solver, keeping only the vertex sequence.
    pub fn into_solution(self) -> Vec<V> {
        self.solution
    }
}

impl<V> ShortestPathsSolver<V> for AStarSolver<V> {
    fn outcome(&self) -> SolverOutcome {
        self.outcome
    }

    fn solution(&self) -> &[V] {
        &self.solution
    }

    fn solution_weight(&self) -> f64 {
        self.solution_weight
    }

    fn num_states_explored(&self) -> usize {
        self.num_states
    }

    fn exploration_time(&self) -> Duration {
        self.exploration_time
    }
}

/// Follow predecessor edges from `terminal` back to the start.
fn reconstruct<V: Clone + Eq + Hash>(edge_to: &FxHashMap<V, WeightedEdge<V>>, terminal: V) -> Vec<V> {
    let mut path = vec![terminal];
    while let Some(edge) = path.last().and_then(|v| edge_to.get(v)) {
        path.push(edge.from().clone());
    }
    path.reverse();
    path
}
