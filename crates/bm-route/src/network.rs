//! Street graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_length_m`) are sorted by
//! source node and indexed by `EdgeId`.  Iteration over a node's outgoing
//! edges is therefore a contiguous memory scan.
//!
//! # Snapping index
//!
//! A [`KdTree`] over `(lon, lat)` maps a clicked coordinate to the nearest
//! vertex.  Only vertices with at least one outgoing edge are indexed, so a
//! snapped vertex can always start or end a route.
//!
//! # Edge weights
//!
//! Every edge weighs the great-circle length between its endpoints, and the
//! A* heuristic is the great-circle distance to the goal.  That heuristic is
//! admissible and consistent on this graph, so solved routes are optimal.

use bm_core::{EdgeId, GeoPoint, HasPoint, NodeId, Point, RoutingConfig};
use bm_search::{AStarGraph, WeightedEdge};
use bm_spatial::{KdTree, PointSet};

use crate::{RouteError, RouteResult};

// ── Snapping entry ────────────────────────────────────────────────────────────

/// Entry stored in the KD-tree: the planar `(lon, lat)` of a vertex with
/// its `NodeId`.
struct VertexEntry {
    at: Point,
    id: NodeId,
}

impl HasPoint for VertexEntry {
    fn point(&self) -> Point {
        self.at
    }
}

// ── StreetGraph ───────────────────────────────────────────────────────────────

/// Directed street graph in CSR format plus a KD-tree for vertex snapping.
///
/// The CSR arrays and node positions are `pub` for direct indexed access on
/// hot paths; the snapping index is private.  Do not construct directly; use
/// [`StreetGraphBuilder`].
pub struct StreetGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Great-circle length of each edge in metres.  Used as the A* weight.
    pub edge_length_m: Vec<f64>,

    // ── Snapping index ────────────────────────────────────────────────────
    snap_idx: KdTree<VertexEntry>,
}

impl StreetGraph {
    /// Construct an empty graph.  Every snap against it fails with
    /// [`SpatialError::Empty`](bm_spatial::SpatialError::Empty).
    pub fn empty() -> Self {
        StreetGraphBuilder::new().build(&RoutingConfig::default())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Number of vertices reachable by snapping.
    pub fn snappable_count(&self) -> usize {
        self.snap_idx.len()
    }

    /// `true` if `node` is a vertex of this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Position of `node`.
    pub fn position(&self, node: NodeId) -> RouteResult<GeoPoint> {
        self.node_pos
            .get(node.index())
            .copied()
            .ok_or(RouteError::NodeNotFound(node))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The vertex closest to `(lon, lat)` among vertices with neighbours.
    ///
    /// Distance is planar in degrees, which is what a map click means.
    pub fn closest(&self, lon: f64, lat: f64) -> RouteResult<NodeId> {
        Ok(self.snap_idx.nearest(lon, lat)?.id)
    }

    /// [`closest`](Self::closest) taking a [`GeoPoint`].
    pub fn snap(&self, pos: GeoPoint) -> RouteResult<NodeId> {
        self.closest(pos.lon, pos.lat)
    }
}

impl AStarGraph<NodeId> for StreetGraph {
    fn neighbors(&self, v: &NodeId, buf: &mut Vec<WeightedEdge<NodeId>>) {
        buf.extend(self.out_edges(*v).map(|e| {
            WeightedEdge::new(*v, self.edge_to[e.index()], self.edge_length_m[e.index()])
        }));
    }

    fn estimated_distance_to_goal(&self, v: &NodeId, goal: &NodeId) -> f64 {
        self.node_pos[v.index()].distance_m(self.node_pos[goal.index()])
    }
}

// ── StreetGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`StreetGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order.  `build()`
/// sorts edges by source node, constructs the CSR arrays, and builds the
/// snapping KD-tree.
///
/// # Example
///
/// ```
/// use bm_core::{GeoPoint, RoutingConfig};
/// use bm_route::StreetGraphBuilder;
///
/// let mut b = StreetGraphBuilder::new();
/// let a = b.add_node(GeoPoint::new(-122.2585, 37.8719));
/// let c = b.add_node(GeoPoint::new(-122.2590, 37.8730));
/// b.add_road(a, c);
/// let graph = b.build(&RoutingConfig::default());
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // bidirectional
/// ```
pub struct StreetGraphBuilder {
    nodes:     Vec<GeoPoint>,
    raw_edges: Vec<(NodeId, NodeId)>,
}

impl StreetGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a street vertex and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either endpoint was not returned by [`add_node`](Self::add_node).
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId) {
        assert!(
            from.index() < self.nodes.len() && to.index() < self.nodes.len(),
            "edge {from} -> {to} references an unknown node",
        );
        self.raw_edges.push((from, to));
    }

    /// Convenience: add edges in **both directions** for a two-way street.
    pub fn add_road(&mut self, a: NodeId, b: NodeId) {
        self.add_directed_edge(a, b);
        self.add_directed_edge(b, a);
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`StreetGraph`].
    ///
    /// `config.shuffle_seed` selects a seeded insertion order for the
    /// snapping tree; `None` inserts vertices in id order.
    pub fn build(self, config: &RoutingConfig) -> StreetGraph {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|&(from, _)| from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|&(from, _)| from).collect();
        let edge_to:   Vec<NodeId> = raw.iter().map(|&(_, to)| to).collect();
        let edge_length_m: Vec<f64> = raw
            .iter()
            .map(|&(from, to)| self.nodes[from.index()].distance_m(self.nodes[to.index()]))
            .collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for &(from, _) in &raw {
            node_out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Index only vertices that can start or end a route.
        let entries: Vec<VertexEntry> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|&(i, _)| node_out_start[i + 1] > node_out_start[i])
            .map(|(i, pos)| VertexEntry { at: pos.point(), id: NodeId(i as u32) })
            .collect();
        let snap_idx = match config.shuffle_seed {
            Some(seed) => KdTree::shuffled(entries, seed),
            None => KdTree::new(entries),
        };

        log::debug!(
            "street graph built: {node_count} nodes, {edge_count} edges, {} snappable",
            snap_idx.len(),
        );

        StreetGraph {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_length_m,
            snap_idx,
        }
    }
}

impl Default for StreetGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
