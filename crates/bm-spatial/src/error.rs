//! Spatial-index error type.

use thiserror::Error;

/// Errors produced by `bm-spatial`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpatialError {
    #[error("nearest-point query on an empty point set")]
    Empty,
}

pub type SpatialResult<T> = Result<T, SpatialError>;
