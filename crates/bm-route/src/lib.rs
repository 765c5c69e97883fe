//! `bm-route` — street graph, coordinate snapping, and routing.
//!
//! Ties the two core primitives together: a [`KdTree`](bm_spatial::KdTree)
//! over vertex coordinates snaps clicked `(lon, lat)` pairs to vertices, and
//! an [`AStarSolver`](bm_search::AStarSolver) routes between them.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `StreetGraph` (CSR + KD-tree), `StreetGraphBuilder`         |
//! | [`router`]  | `Router` trait, `Route`, `AStarRouter`, `shortest_path`     |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `route_batch` runs queries on the Rayon pool.             |
//! | `serde`    | Enables serde derives on the coordinate and id types.     |

pub mod error;
pub mod network;
pub mod router;


pub use error::{RouteError, RouteResult};
pub use network::{StreetGraph, StreetGraphBuilder};
pub use router::{route_batch, shortest_path, AStarRouter, Route, Router};
