//! `mg-core` — foundational types for the `rust_mg` mobility graph framework.
//!
//! This crate is a dependency of every other `mg-*` crate.  It intentionally
//! has no `mg-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `AreaId`, `ConnId`                                    |
//! | [`geo`]     | `GeoPoint`, haversine distance, forward projection    |
//! | [`mode`]    | `TravelMode`, `TransitMode`, `LegMode`                |
//! | [`timing`]  | `TripTiming` (exclusive departure/arrival constraint) |
//! | [`rng`]     | `SampleRng` (injectable, seedable randomness)         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod mode;
pub mod rng;
pub mod timing;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{AreaId, ConnId};
pub use mode::{LegMode, TransitMode, TravelMode};
pub use rng::SampleRng;
pub use timing::TripTiming;
