//! `bm-spatial` — nearest-point queries over static 2-D point sets.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`point_set`]  | `PointSet` trait                                         |
//! | [`kdtree`]     | `KdTree` (arena-backed 2-d tree), `Orientation`          |
//! | [`naive`]      | `NaivePointSet` — brute-force linear scan                |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                       |
//!
//! Indexes are generic over any [`HasPoint`](bm_core::HasPoint) record and
//! return a reference to the stored record, so payload attached to a point
//! (a vertex id, a name) comes back with the answer.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod kdtree;
pub mod naive;
pub mod point_set;


pub use error::{SpatialError, SpatialResult};
pub use kdtree::{KdTree, Orientation};
pub use naive::NaivePointSet;
pub use point_set::PointSet;
