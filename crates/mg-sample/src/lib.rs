//! `mg-sample` — representative-point sampling for mobility areas.
//!
//! An area is characterized by a set of representative locations drawn
//! uniformly (by area) from a disc around its center, minus any exclusion
//! zones — stretches of water, rail yards, or other places no trip starts
//! or ends.  Accepted points are projected to geographic coordinates and
//! tagged with best-effort reverse-geocoding results.
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`zone`]     | `ExclusionZone` convex-quad rejection test           |
//! | [`sampler`]  | `LocationSampler`, `PlanarOffset`, `RadialSample`    |
//! | [`location`] | `Location`, `PlaceTags`, `TagStatistics`             |
//! | [`geocode`]  | `Geocoder` trait, `NullGeocoder`                     |
//! | [`error`]    | `SampleError`                                        |

pub mod error;
pub mod geocode;
pub mod location;
pub mod sampler;
pub mod zone;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SampleError, SampleResult};
pub use geocode::{GeocodeError, Geocoder, NullGeocoder};
pub use location::{Location, PlaceTags, TagStatistics, UNKNOWN_TAG};
pub use sampler::{LocationSampler, PlanarOffset, RadialSample};
pub use zone::ExclusionZone;
