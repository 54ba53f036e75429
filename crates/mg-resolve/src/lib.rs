//! `mg-resolve` — resolving connections into per-pair travel estimates.
//!
//! The external routing provider accepts at most K origins and K
//! destinations per call.  [`QueryBatcher`] decomposes a connection's full
//! origin×destination matrix into ≤K×K sub-matrices, issues one provider
//! call per sub-matrix, parses each returned cell's duration and distance
//! text, and appends the results to the connection keyed by global
//! location indices.
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`provider`]| `RouteEstimator` trait, `MatrixRequest`/`MatrixResponse`|
//! | [`units`]   | duration/distance text normalization                    |
//! | [`batcher`] | `QueryBatcher`, `BatchReport`                           |
//! | [`error`]   | `ResolveError`                                          |

pub mod batcher;
pub mod error;
pub mod provider;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use batcher::{BatchReport, QueryBatcher, DEFAULT_KERNEL};
pub use error::{ResolveError, ResolveResult};
pub use provider::{
    coord_param, Avoid, MatrixCell, MatrixRequest, MatrixResponse, ProviderError, RouteEstimator,
    TrafficModel,
};
pub use units::{parse_distance_km, parse_duration_min, UnitParseError};
