//! Graph capability consumed by the solver.

/// An immutable directed edge with a non-negative weight.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedEdge<V> {
    from:   V,
    to:     V,
    weight: f64,
}

impl<V> WeightedEdge<V> {
    #[inline]
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }

    #[inline]
    pub fn from(&self) -> &V {
        &self.from
    }

    #[inline]
    pub fn to(&self) -> &V {
        &self.to
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A weighted directed graph with a distance-to-goal heuristic.
///
/// # Heuristic obligation
///
/// `estimated_distance_to_goal` must be **admissible** (never exceeds the
/// true remaining distance) and **consistent** (`h(u) <= w(u, v) + h(v)` for
/// every edge) for solved paths to be optimal.  Nothing checks this; a bad
/// heuristic silently yields suboptimal paths still reported as solved.
pub trait AStarGraph<V> {
    /// Append the outgoing edges of `v` to `buf`, in any order.  The caller
    /// clears `buf` before calling.
    fn neighbors(&self, v: &V, buf: &mut Vec<WeightedEdge<V>>);

    /// Non-negative estimate of the distance from `v` to `goal`.
    fn estimated_distance_to_goal(&self, v: &V, goal: &V) -> f64;
}

impl<V, G: AStarGraph<V> + ?Sized> AStarGraph<V> for &G {
    #[inline]
    fn neighbors(&self, v: &V, buf: &mut Vec<WeightedEdge<V>>) {
        (**self).neighbors(v, buf)
    }

    #[inline]
    fn estimated_distance_to_goal(&self, v: &V, goal: &V) -> f64 {
        (**self).estimated_distance_to_goal(v, goal)
    }
}
