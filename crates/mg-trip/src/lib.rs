//! `mg-trip` — synthetic trip sampling over resolved connection chains.
//!
//! Given an ordered chain of connections whose estimates have been resolved,
//! [`TripSampler`] draws independent random trips: one resolved pair per
//! leg, each leg's origin matching the coordinate the previous leg reached.
//! A trip that cannot continue fails alone ([`TripError::DisconnectedPath`]);
//! the run reports partial success.

pub mod error;
pub mod sampler;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TripError, TripResult};
pub use sampler::{SampleReport, Trip, TripSampler};
