//! Routing error type.

use thiserror::Error;

use bm_core::{BmError, NodeId};
use bm_spatial::SpatialError;

/// Errors produced by `bm-route`.
///
/// An unreachable destination is not an error; it is reported through
/// [`Route::outcome`](crate::Route::outcome).
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("cannot snap coordinates: {0}")]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Config(#[from] BmError),
}

pub type RouteResult<T> = Result<T, RouteError>;
