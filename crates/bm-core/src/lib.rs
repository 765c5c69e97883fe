//! `bm-core` — foundational types for the bearmap routing workspace.
//!
//! This crate is a dependency of every other `bm-*` crate.  It intentionally
//! has no `bm-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`                                    |
//! | [`geo`]         | `Point`, `HasPoint`, `GeoPoint`, haversine distance   |
//! | [`time`]        | `Stopwatch`                                           |
//! | [`rng`]         | `SeededRng`                                           |
//! | [`config`]      | `RoutingConfig`                                       |
//! | [`error`]       | `BmError`, `BmResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RoutingConfig;
pub use error::{BmError, BmResult};
pub use geo::{GeoPoint, HasPoint, Point};
pub use ids::{EdgeId, NodeId};
pub use rng::SeededRng;
pub use time::Stopwatch;
