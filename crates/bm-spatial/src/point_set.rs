//! Common interface for nearest-point indexes.

use bm_core::Point;

use crate::SpatialResult;

/// A static collection of records answering nearest-point queries.
pub trait PointSet<P> {
    /// The stored record closest to `(x, y)` by Euclidean distance.
    ///
    /// Fails with [`SpatialError::Empty`](crate::SpatialError::Empty) when
    /// the set holds no points.
    fn nearest(&self, x: f64, y: f64) -> SpatialResult<&P>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// [`nearest`](Self::nearest) taking a [`Point`].
    fn nearest_to(&self, goal: Point) -> SpatialResult<&P> {
        self.nearest(goal.x, goal.y)
    }
}
