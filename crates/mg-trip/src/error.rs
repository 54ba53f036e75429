//! Trip-sampling error type.
//!
//! [`TripError::DisconnectedPath`] is a unit-of-work failure: it fails one
//! trip and is absorbed into the [`crate::SampleReport`].  Every other
//! variant is structural and aborts the whole sampling run.

use thiserror::Error;

use mg_core::ConnId;
use mg_graph::GraphError;

/// Errors produced by `mg-trip`.
#[derive(Debug, Error)]
pub enum TripError {
    /// No resolved pair of the next leg starts at the coordinate the trip
    /// has reached.  Fails only this trip, never the run.
    #[error("no resolved pair of {conn} continues from the reached coordinate (leg {leg})")]
    DisconnectedPath { conn: ConnId, leg: usize },

    /// A chain with zero legs has no trips to sample.
    #[error("trip chain is empty")]
    EmptyChain,

    /// A leg has no resolved pairs at all, so every trip would fail.
    #[error("{conn} has no resolved pairs")]
    NoPairs { conn: ConnId },

    /// Unset endpoints, dangling ids.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type TripResult<T> = Result<T, TripError>;
