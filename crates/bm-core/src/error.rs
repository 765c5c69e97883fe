//! Workspace base error type.
//!
//! Sub-crates define their own error enums (`SpatialError`, `RouteError`) and
//! wrap `BmError` as one variant where configuration can fail.

use thiserror::Error;

/// The top-level error type for `bm-core`.
#[derive(Debug, Error)]
pub enum BmError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `bm-core`.
pub type BmResult<T> = Result<T, BmError>;
