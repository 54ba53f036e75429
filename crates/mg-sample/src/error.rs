//! Sampling-subsystem error type.

use thiserror::Error;

/// Errors produced by `mg-sample`.
#[derive(Debug, Error)]
pub enum SampleError {
    /// The exclusion zones are too restrictive for the requested count and
    /// radius: the cap on rejected draws was hit before `requested` points
    /// were accepted.  Aborts the sampling call.
    #[error("sampling exhausted after {attempts} attempts ({accepted}/{requested} points accepted)")]
    Exhausted {
        attempts:  u32,
        accepted:  usize,
        requested: usize,
    },
}

pub type SampleResult<T> = Result<T, SampleError>;
