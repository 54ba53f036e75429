//! Resolve-subsystem error type.
//!
//! Only structural misconfiguration aborts a resolve; provider outages and
//! unparseable cells are absorbed into the [`crate::BatchReport`] instead.

use thiserror::Error;

use mg_graph::GraphError;

/// Errors produced by `mg-resolve`.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Unset endpoints, dangling ids — anything where continuing would
    /// produce meaningless estimates.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type ResolveResult<T> = Result<T, ResolveError>;
