//! Unit and property tests for bm-search.
//!
//! All graphs are hand-built adjacency lists so the tests need no map data.

#[cfg(test)]
mod helpers {
    use std::collections::HashMap;
    use std::hash::Hash;
    use std::thread;
    use std::time::Duration;

    use crate::{AStarGraph, WeightedEdge};

    /// Adjacency-list graph with a per-vertex heuristic table.  Vertices with
    /// no entry in `h` get a heuristic of 0.
    pub struct AdjGraph<V> {
        pub adj: HashMap<V, Vec<WeightedEdge<V>>>,
        pub h:   HashMap<V, f64>,
    }

    impl<V: Clone + Eq + Hash> AdjGraph<V> {
        pub fn new() -> Self {
            Self { adj: HashMap::new(), h: HashMap::new() }
        }

        pub fn edge(&mut self, from: V, to: V, weight: f64) -> &mut Self {
            self.adj
                .entry(from.clone())
                .or_default()
                .push(WeightedEdge::new(from, to, weight));
            self
        }

        pub fn has_edge(&self, from: &V, to: &V) -> bool {
            self.adj
                .get(from)
                .is_some_and(|es| es.iter().any(|e| e.to() == to))
        }
    }

    impl<V: Clone + Eq + Hash> AStarGraph<V> for AdjGraph<V> {
        fn neighbors(&self, v: &V, buf: &mut Vec<WeightedEdge<V>>) {
            if let Some(es) = self.adj.get(v) {
                buf.extend(es.iter().cloned());
            }
        }

        fn estimated_distance_to_goal(&self, v: &V, _goal: &V) -> f64 {
            self.h.get(v).copied().unwrap_or(0.0)
        }
    }

    /// Unbounded chain `0 → 1 → 2 → …` whose every expansion sleeps, so a
    /// wall-clock budget runs out after a predictable number of steps.
    pub struct SlowChain {
        pub delay:  Duration,
        pub weight: f64,
    }

    impl AStarGraph<u32> for SlowChain {
        fn neighbors(&self, v: &u32, buf: &mut Vec<WeightedEdge<u32>>) {
            thread::sleep(self.delay);
            buf.push(WeightedEdge::new(*v, v + 1, self.weight));
        }

        fn estimated_distance_to_goal(&self, _v: &u32, _goal: &u32) -> f64 {
            0.0
        }
    }

    /// A→B 1, B→D 1, A→C 5, C→D 1.
    pub fn diamond() -> AdjGraph<char> {
        let mut g = AdjGraph::new();
        g.edge('A', 'B', 1.0)
            .edge('B', 'D', 1.0)
            .edge('A', 'C', 5.0)
            .edge('C', 'D', 1.0);
        g
    }

    /// Reference single-source distances by Bellman-Ford relaxation.
    pub fn bellman_ford(n: usize, edges: &[(usize, usize, f64)], src: usize) -> Vec<f64> {
        let mut dist = vec![f64::INFINITY; n];
        dist[src] = 0.0;
        for _ in 0..n {
            for &(u, v, w) in edges {
                if dist[u] + w < dist[v] {
                    dist[v] = dist[u] + w;
                }
            }
        }
        dist
    }
}

// ── Fixed scenarios ───────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use std::time::Duration;

    use bm_pq::NaiveMinPq;

    use super::helpers::{diamond, AdjGraph, SlowChain};
    use crate::{AStarSolver, ShortestPathsSolver, SolverOutcome};

    const BUDGET: Duration = Duration::from_secs(60);

    #[test]
    fn diamond_prefers_cheap_branch() {
        let g = diamond();
        let s = AStarSolver::new(&g, 'A', 'D', BUDGET);
        assert_eq!(s.outcome(), SolverOutcome::Solved);
        assert!(s.is_solved());
        assert_eq!(s.solution(), &['A', 'B', 'D']);
        assert_eq!(s.solution_weight(), 2.0);
        assert!(s.num_states_explored() <= 4, "explored {}", s.num_states_explored());
        assert!(s.exploration_time() < BUDGET);
    }

    #[test]
    fn start_equals_goal() {
        let g = diamond();
        let s = AStarSolver::new(&g, 'C', 'C', BUDGET);
        assert_eq!(s.outcome(), SolverOutcome::Solved);
        assert_eq!(s.solution(), &['C']);
        assert_eq!(s.solution_weight(), 0.0);
        assert_eq!(s.num_states_explored(), 0);
    }

    #[test]
    fn start_equals_goal_with_zero_budget() {
        let g = diamond();
        let s = AStarSolver::new(&g, 'A', 'A', Duration::ZERO);
        assert_eq!(s.outcome(), SolverOutcome::Solved);
        assert_eq!(s.solution(), &['A']);
    }

    #[test]
    fn unreachable_goal() {
        let g = diamond();
        // Edges are one-way: nothing leads back to A.
        let s = AStarSolver::new(&g, 'D', 'A', BUDGET);
        assert_eq!(s.outcome(), SolverOutcome::Unsolvable);
        assert!(s.solution().is_empty());
        assert_eq!(s.solution_weight(), f64::INFINITY);
        assert_eq!(s.num_states_explored(), 1);
    }

    #[test]
    fn unknown_goal_exhausts_component() {
        let g = diamond();
        let s = AStarSolver::new(&g, 'A', 'Z', BUDGET);
        assert_eq!(s.outcome(), SolverOutcome::Unsolvable);
        assert_eq!(s.num_states_explored(), 4);
    }

    #[test]
    fn zero_budget_times_out_at_start() {
        let g = diamond();
        let s = AStarSolver::new(&g, 'A', 'D', Duration::ZERO);
        assert_eq!(s.outcome(), SolverOutcome::Timeout);
        assert_eq!(s.solution(), &['A']);
        assert_eq!(s.solution_weight(), 0.0);
        assert_eq!(s.num_states_explored(), 0);
    }

    #[test]
    fn heuristic_steers_expansion() {
        // Long chain to the goal and a wide fan of dead ends; a perfect
        // heuristic never expands the fan.
        let mut g = AdjGraph::new();
        for i in 0..10u32 {
            g.edge(i, i + 1, 1.0);
            g.h.insert(i, f64::from(10 - i));
        }
        for leaf in 100..150u32 {
            g.edge(0, leaf, 1.0);
            g.h.insert(leaf, 50.0);
        }
        let s = AStarSolver::new(&g, 0, 10, BUDGET);
        assert_eq!(s.outcome(), SolverOutcome::Solved);
        assert_eq!(s.solution_weight(), 10.0);
        assert_eq!(s.num_states_explored(), 10);
    }

    #[test]
    fn decrease_key_updates_frontier() {
        // C is first discovered at distance 10, then improved to 2 via B.
        let mut g = AdjGraph::new();
        g.edge('A', 'C', 10.0)
            .edge('A', 'B', 1.0)
            .edge('B', 'C', 1.0)
            .edge('C', 'D', 1.0);
        let s = AStarSolver::new(&g, 'A', 'D', BUDGET);
        assert_eq!(s.solution(), &['A', 'B', 'C', 'D']);
        assert_eq!(s.solution_weight(), 3.0);
    }

    #[test]
    fn zero_weight_edges() {
        let mut g = AdjGraph::new();
        g.edge(1, 2, 0.0).edge(2, 3, 0.0).edge(1, 3, 0.5);
        let s = AStarSolver::new(&g, 1, 3, BUDGET);
        assert_eq!(s.solution(), &[1, 2, 3]);
        assert_eq!(s.solution_weight(), 0.0);
    }

    #[test]
    fn inadmissible_heuristic_is_not_detected() {
        // Overestimating B hides the optimal route; still reported as solved.
        let mut g = diamond();
        g.h.insert('B', 100.0);
        let s = AStarSolver::new(&g, 'A', 'D', BUDGET);
        assert_eq!(s.outcome(), SolverOutcome::Solved);
        assert_eq!(s.solution(), &['A', 'C', 'D']);
        assert_eq!(s.solution_weight(), 6.0);
    }

    #[test]
    fn naive_queue_gives_same_answer() {
        let g = diamond();
        let heap = AStarSolver::new(&g, 'A', 'D', BUDGET);
        let naive = AStarSolver::with_queue(NaiveMinPq::new(), &g, 'A', 'D', BUDGET);
        assert_eq!(heap.solution(), naive.solution());
        assert_eq!(heap.solution_weight(), naive.solution_weight());
        assert_eq!(heap.num_states_explored(), naive.num_states_explored());
    }

    #[test]
    #[should_panic(expected = "must start empty")]
    fn prefilled_queue_is_rejected() {
        use bm_pq::ExtrinsicMinPq;

        let g = diamond();
        let mut pq = NaiveMinPq::new();
        pq.add('C', 0.0);
        let _ = AStarSolver::with_queue(pq, &g, 'A', 'D', BUDGET);
    }

    #[test]
    fn budget_spent_mid_search_reports_frontier_path() {
        let g = SlowChain { delay: Duration::from_millis(20), weight: 2.0 };
        let s = AStarSolver::new(&g, 0u32, 1_000, Duration::from_millis(100));

        assert_eq!(s.outcome(), SolverOutcome::Timeout);
        let path = s.solution();
        assert!(path.len() > 1, "search stopped before any progress: {path:?}");
        assert!(path.iter().copied().eq(0..path.len() as u32), "not a chain from start: {path:?}");
        assert_eq!(s.num_states_explored(), path.len() - 1);
        assert_eq!(s.solution_weight(), 2.0 * (path.len() - 1) as f64);
    }

    #[test]
    fn into_solution_returns_path() {
        let g = diamond();
        let path = AStarSolver::new(&g, 'A', 'B', BUDGET).into_solution();
        assert_eq!(path, vec!['A', 'B']);
    }

    #[test]
    fn outcome_display() {
        assert_eq!(SolverOutcome::Solved.to_string(), "solved");
        assert_eq!(SolverOutcome::Timeout.to_string(), "timeout");
        assert_eq!(SolverOutcome::Unsolvable.to_string(), "unsolvable");
    }
}

// ── Properties against a reference ────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use std::time::Duration;

    use proptest::prelude::*;

    use super::helpers::{bellman_ford, AdjGraph};
    use crate::{AStarSolver, ShortestPathsSolver, SolverOutcome};

    const BUDGET: Duration = Duration::from_secs(60);

    fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
        (2usize..12).prop_flat_map(|n| {
            let edge = (0..n, 0..n, 0u32..20).prop_map(|(u, v, w)| (u, v, f64::from(w)));
            (Just(n), prop::collection::vec(edge, 0..40))
        })
    }

    fn build(edges: &[(usize, usize, f64)]) -> AdjGraph<usize> {
        let mut g = AdjGraph::new();
        for &(u, v, w) in edges {
            g.edge(u, v, w);
        }
        g
    }

    /// Every consecutive pair of a path is an edge, and it starts at `start`.
    fn assert_valid_path(g: &AdjGraph<usize>, path: &[usize], start: usize) {
        assert_eq!(path.first(), Some(&start));
        for pair in path.windows(2) {
            assert!(g.has_edge(&pair[0], &pair[1]), "{} -> {} is not an edge", pair[0], pair[1]);
        }
    }

    proptest! {
        /// With a zero heuristic A* is Dijkstra: weights match Bellman-Ford.
        #[test]
        fn zero_heuristic_matches_reference(
            (n, edges) in arb_graph(),
            start in 0usize..12,
            goal in 0usize..12,
        ) {
            let start = start % n;
            let goal = goal % n;
            let g = build(&edges);
            let reference = bellman_ford(n, &edges, start);
            let s = AStarSolver::new(&g, start, goal, BUDGET);

            if reference[goal].is_infinite() {
                prop_assert_eq!(s.outcome(), SolverOutcome::Unsolvable);
                prop_assert!(s.solution().is_empty());
                prop_assert_eq!(s.solution_weight(), f64::INFINITY);
            } else {
                prop_assert_eq!(s.outcome(), SolverOutcome::Solved);
                prop_assert_eq!(s.solution_weight(), reference[goal]);
                prop_assert_eq!(s.solution().last(), Some(&goal));
                assert_valid_path(&g, s.solution(), start);
                let path_weight: f64 = s
                    .solution()
                    .windows(2)
                    .map(|p| {
                        edges
                            .iter()
                            .filter(|e| e.0 == p[0] && e.1 == p[1])
                            .map(|e| e.2)
                            .fold(f64::INFINITY, f64::min)
                    })
                    .sum();
                prop_assert_eq!(path_weight, reference[goal]);
            }
        }

        /// Euclidean positions give a consistent heuristic when every edge
        /// is at least as long as the straight line between its endpoints.
        #[test]
        fn consistent_heuristic_is_optimal(
            coords in prop::collection::vec((0u32..100, 0u32..100), 2..12),
            raw_edges in prop::collection::vec((0usize..12, 0usize..12, 0u32..50), 0..40),
            goal in 0usize..12,
        ) {
            let n = coords.len();
            let pos: Vec<(f64, f64)> = coords.iter().map(|&(x, y)| (f64::from(x), f64::from(y))).collect();
            let straight = |a: usize, b: usize| {
                let (dx, dy) = (pos[a].0 - pos[b].0, pos[a].1 - pos[b].1);
                (dx * dx + dy * dy).sqrt()
            };
            let goal = goal % n;
            let edges: Vec<(usize, usize, f64)> = raw_edges
                .iter()
                .map(|&(u, v, extra)| {
                    let (u, v) = (u % n, v % n);
                    (u, v, straight(u, v) + f64::from(extra))
                })
                .collect();

            let mut g = build(&edges);
            for v in 0..n {
                g.h.insert(v, straight(v, goal));
            }
            let reference = bellman_ford(n, &edges, 0);
            let s = AStarSolver::new(&g, 0, goal, BUDGET);

            if reference[goal].is_infinite() {
                prop_assert_eq!(s.outcome(), SolverOutcome::Unsolvable);
            } else {
                prop_assert_eq!(s.outcome(), SolverOutcome::Solved);
                prop_assert!((s.solution_weight() - reference[goal]).abs() < 1e-6,
                    "got {}, expected {}", s.solution_weight(), reference[goal]);
                assert_valid_path(&g, s.solution(), 0);
            }
        }

        /// A spent budget still yields a valid partial path from the start.
        #[test]
        fn timeout_reports_partial_path(
            (n, edges) in arb_graph(),
            goal in 1usize..12,
        ) {
            let goal = 1 + goal % (n - 1);
            let g = build(&edges);
            let s = AStarSolver::new(&g, 0, goal, Duration::ZERO);
            prop_assert_eq!(s.outcome(), SolverOutcome::Timeout);
            if !s.solution().is_empty() {
                assert_valid_path(&g, s.solution(), 0);
            }
        }
    }
}
