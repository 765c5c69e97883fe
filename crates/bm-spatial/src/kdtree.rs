//! 2-d tree over a static point set.
//!
//! # Shape
//!
//! Points are inserted one at a time in input order.  The root splits on x
//! ([`Orientation::Horizontal`]) and each level below flips the axis.  A point
//! whose coordinate on the node's axis is strictly less than the node's goes
//! down (left); everything else, ties included, goes up (right).  A point
//! equal to a stored one in both coordinates is dropped.
//!
//! There is no rebalancing, so pre-sorted input builds a linked list.
//! [`KdTree::shuffled`] inserts in a seeded random order instead.
//!
//! # Storage
//!
//! Nodes live in one arena `Vec` and refer to their children by index.  Node 0
//! is the root.  Both insertion and queries walk the tree iteratively, so a
//! degenerate tree costs time but never call-stack depth.
//!
//! # Nearest-point search
//!
//! Depth-first from the root, which seeds the best candidate.  At each node
//! the good side (the child on the goal's side of the split) is searched
//! before the bad side.  The bad side is searched only if the squared
//! distance from the goal to the splitting line is strictly less than the
//! best squared distance found so far; every point beyond the line is at
//! least that far away, so an equal bound cannot hide a strictly closer
//! point.  A candidate replaces the best only when strictly closer, so among
//! equidistant points the first one reached is returned.

use bm_core::{HasPoint, Point, SeededRng};

use crate::{PointSet, SpatialError, SpatialResult};

// ── Orientation ───────────────────────────────────────────────────────────────

/// The axis a node splits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Split on x: the dividing line is vertical, children are left/right.
    Horizontal,
    /// Split on y: the dividing line is horizontal, children are down/up.
    Vertical,
}

impl Orientation {
    #[inline]
    pub fn flip(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// The coordinate of `p` this orientation compares.
    #[inline]
    pub fn key(self, p: Point) -> f64 {
        match self {
            Orientation::Horizontal => p.x,
            Orientation::Vertical => p.y,
        }
    }
}

// ── Node ──────────────────────────────────────────────────────────────────────

struct Node<P> {
    item:        P,
    point:       Point,
    orientation: Orientation,
    /// Child holding strictly smaller keys.
    down:        Option<usize>,
    /// Child holding greater-or-equal keys.
    up:          Option<usize>,
}

// ── KdTree ────────────────────────────────────────────────────────────────────

/// Immutable 2-d tree answering exact nearest-point queries.
pub struct KdTree<P> {
    nodes: Vec<Node<P>>,
}

impl<P: HasPoint> KdTree<P> {
    /// Build by inserting `items` in iteration order.
    pub fn new<I: IntoIterator<Item = P>>(items: I) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        for item in items {
            tree.insert(item);
        }
        tree.log_built();
        tree
    }

    /// Build after shuffling `items` with a seeded RNG.  Same seed, same tree.
    pub fn shuffled(mut items: Vec<P>, seed: u64) -> Self {
        SeededRng::new(seed).shuffle(&mut items);
        Self::new(items)
    }

    fn insert(&mut self, item: P) {
        let point = item.point();

        if self.nodes.is_empty() {
            self.nodes.push(Node {
                item,
                point,
                orientation: Orientation::Horizontal,
                down: None,
                up: None,
            });
            return;
        }

        let mut cur = 0;
        loop {
            let node = &self.nodes[cur];
            if node.point == point {
                return;
            }
            let goes_down = node.orientation.key(point) < node.orientation.key(node.point);
            let child = if goes_down { node.down } else { node.up };
            match child {
                Some(next) => cur = next,
                None => {
                    let orientation = node.orientation.flip();
                    let idx = self.nodes.len();
                    self.nodes.push(Node { item, point, orientation, down: None, up: None });
                    let parent = &mut self.nodes[cur];
                    if goes_down {
                        parent.down = Some(idx);
                    } else {
                        parent.up = Some(idx);
                    }
                    return;
                }
            }
        }
    }

    fn log_built(&self) {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("kd-tree built: {} points, depth {}", self.len(), self.depth());
        }
    }

    /// Number of distinct points stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut stack = vec![(0usize, 1usize)];
        while let Some((idx, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[idx];
            stack.extend(node.down.map(|c| (c, depth + 1)));
            stack.extend(node.up.map(|c| (c, depth + 1)));
        }
        deepest
    }

    /// Stored records in insertion order (duplicates excluded).
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.nodes.iter().map(|n| &n.item)
    }

    /// Index of the node nearest to `goal`.  Caller guarantees non-empty.
    fn nearest_index(&self, goal: Point) -> usize {
        let mut best = 0;
        let mut best_d = self.nodes[0].point.distance_squared(goal);

        // (node, squared lower bound on the distance from goal to anything
        // in that subtree)
        let mut stack: Vec<(usize, f64)> = vec![(0, 0.0)];
        while let Some((idx, bound)) = stack.pop() {
            if bound >= best_d {
                continue;
            }
            let node = &self.nodes[idx];

            let d = node.point.distance_squared(goal);
            if d < best_d {
                best = idx;
                best_d = d;
            }

            let diff = node.orientation.key(goal) - node.orientation.key(node.point);
            let (good, bad) = if diff < 0.0 {
                (node.down, node.up)
            } else {
                (node.up, node.down)
            };

            // Pushed first so it is popped after the whole good side.
            if let Some(bad) = bad {
                stack.push((bad, bound.max(diff * diff)));
            }
            if let Some(good) = good {
                stack.push((good, bound));
            }
        }
        best
    }
}

impl<P: HasPoint> PointSet<P> for KdTree<P> {
    fn nearest(&self, x: f64, y: f64) -> SpatialResult<&P> {
        if self.nodes.is_empty() {
            return Err(SpatialError::Empty);
        }
        let idx = self.nearest_index(Point::new(x, y));
        Ok(&self.nodes[idx].item)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<P: HasPoint> FromIterator<P> for KdTree<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}
