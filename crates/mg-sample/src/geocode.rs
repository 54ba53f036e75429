//! Reverse-geocoding seam.
//!
//! The real provider (an HTTP nominatim-style service) lives outside this
//! workspace; the sampler only needs the narrow trait below.  Geocoding is
//! best-effort by contract: a failed lookup degrades to
//! [`PlaceTags::unknown`] and is never fatal to a sampling call.

use thiserror::Error;

use mg_core::GeoPoint;

use crate::location::PlaceTags;

/// Errors a geocoding backend may report.  All of them are recoverable at
/// the sampling layer.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding provider unavailable: {0}")]
    Unavailable(String),
}

/// Best-effort reverse geocoding: coordinate → qualitative place tags.
///
/// Implementations should return whatever subset of fields they can resolve,
/// filling the rest with [`crate::UNKNOWN_TAG`].
pub trait Geocoder {
    fn reverse(&self, point: GeoPoint) -> Result<PlaceTags, GeocodeError>;
}

/// Geocoder that resolves nothing.  Every lookup yields all-unknown tags.
pub struct NullGeocoder;

impl Geocoder for NullGeocoder {
    fn reverse(&self, _point: GeoPoint) -> Result<PlaceTags, GeocodeError> {
        Ok(PlaceTags::unknown())
    }
}
