//! Graph-subsystem error type.

use thiserror::Error;

use mg_core::{AreaId, ConnId, TransitMode};
use mg_sample::SampleError;

/// Errors produced by `mg-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A connection was resolved or sampled with an unset (or dangling)
    /// endpoint area.  Structural misconfiguration: aborts the operation.
    #[error("connection {conn} has an unset or missing endpoint area")]
    EndpointMissing { conn: ConnId },

    #[error("area {0} not found in graph")]
    AreaNotFound(AreaId),

    #[error("connection {0} not found in graph")]
    ConnNotFound(ConnId),

    /// The stop registry has no stops for this (mode, line) selection.
    #[error("no {mode} stops registered for line {line:?}")]
    UnknownLine { mode: TransitMode, line: String },

    #[error(transparent)]
    Sampling(#[from] SampleError),
}

pub type GraphResult<T> = Result<T, GraphError>;
