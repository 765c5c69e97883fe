//! Brute-force reference index.

use bm_core::{HasPoint, Point};

use crate::{PointSet, SpatialError, SpatialResult};

/// Answers every query with a linear scan.  Correct by inspection; used to
/// validate [`KdTree`](crate::KdTree) and fine for a handful of points.
#[derive(Clone, Debug)]
pub struct NaivePointSet<P> {
    items: Vec<P>,
}

impl<P: HasPoint> NaivePointSet<P> {
    pub fn new(items: Vec<P>) -> Self {
        Self { items }
    }
}

impl<P: HasPoint> PointSet<P> for NaivePointSet<P> {
    /// Among equally distant records the earliest one wins.
    fn nearest(&self, x: f64, y: f64) -> SpatialResult<&P> {
        let goal = Point::new(x, y);
        let mut best: Option<(&P, f64)> = None;
        for item in &self.items {
            let d = item.point().distance_squared(goal);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((item, d));
            }
        }
        best.map(|(item, _)| item).ok_or(SpatialError::Empty)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
