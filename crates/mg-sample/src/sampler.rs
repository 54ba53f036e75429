//! Disc rejection sampling and geographic projection.
//!
//! # Algorithm
//!
//! For each point: draw a bearing θ uniform in [0, 2π) and a radial
//! fraction u uniform in [0, 1), set r = radius·√u (the square root makes
//! density uniform over the disc's *area*, not over radius), and test the
//! planar `(r·cos θ, r·sin θ)` offset against every exclusion zone.  On
//! collision, resample.  Accepted `(θ, r)` pairs are projected from the
//! disc center with the spherical forward-bearing formula and tagged via
//! the injected [`Geocoder`].
//!
//! The resample-attempt cap is shared across the whole call and counts
//! rejected draws only, so a zone-free call always succeeds regardless of
//! the requested count; zones that swallow most of the disc fail fast with
//! [`SampleError::Exhausted`] instead of spinning.

use log::debug;

use mg_core::{GeoPoint, SampleRng};

use crate::error::{SampleError, SampleResult};
use crate::geocode::Geocoder;
use crate::location::{Location, PlaceTags, TagStatistics};
use crate::zone::ExclusionZone;

/// Default cap on rejected draws per sampling call.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// One accepted draw in the planar frame, before geographic projection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanarOffset {
    /// Cartesian km offsets from the disc center.
    pub x: f64,
    pub y: f64,
    /// The polar form the offset was drawn in.
    pub bearing_rad: f64,
    pub radius_km:   f64,
}

/// A completed sample: the accepted locations in draw order, plus tag-count
/// diagnostics.
#[derive(Debug, Clone)]
pub struct RadialSample {
    pub locations: Vec<Location>,
    pub stats:     TagStatistics,
}

/// Rejection sampler for representative points within an area.
#[derive(Copy, Clone, Debug)]
pub struct LocationSampler {
    max_attempts: u32,
}

impl Default for LocationSampler {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}

impl LocationSampler {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Draw exactly `n` planar offsets uniform over the disc's area and
    /// outside every zone.
    ///
    /// Only draws rejected by a zone count against the attempt cap, so `n`
    /// may exceed the cap.
    pub fn sample_disc(
        &self,
        radius_km: f64,
        n:         usize,
        zones:     &[ExclusionZone],
        rng:       &mut SampleRng,
    ) -> SampleResult<Vec<PlanarOffset>> {
        let mut accepted = Vec::with_capacity(n);
        let mut rejected = 0u32;

        while accepted.len() < n {
            let bearing = rng.unit() * 2.0 * std::f64::consts::PI;
            let r = rng.unit().sqrt() * radius_km;
            let (x, y) = (r * bearing.cos(), r * bearing.sin());

            if zones.iter().any(|z| z.contains(x, y)) {
                rejected += 1;
                if rejected >= self.max_attempts {
                    return Err(SampleError::Exhausted {
                        attempts:  rejected,
                        accepted:  accepted.len(),
                        requested: n,
                    });
                }
                continue;
            }
            accepted.push(PlanarOffset { x, y, bearing_rad: bearing, radius_km: r });
        }

        debug!(
            "sample_disc: accepted {} points, {rejected} rejected (radius {radius_km} km, {} zones)",
            accepted.len(),
            zones.len()
        );
        Ok(accepted)
    }

    /// Sample `n` tagged locations around `center`.
    ///
    /// Geocoding failures degrade to all-unknown tags; only zone exhaustion
    /// fails the call.
    pub fn sample(
        &self,
        center:    GeoPoint,
        radius_km: f64,
        n:         usize,
        zones:     &[ExclusionZone],
        geocoder:  &dyn Geocoder,
        rng:       &mut SampleRng,
    ) -> SampleResult<RadialSample> {
        let offsets = self.sample_disc(radius_km, n, zones, rng)?;

        let mut stats = TagStatistics::default();
        let locations = offsets
            .iter()
            .map(|off| {
                let point = center.project(off.radius_km, off.bearing_rad);
                let tags = match geocoder.reverse(point) {
                    Ok(tags) => tags,
                    Err(err) => {
                        debug!("reverse geocode failed at {point}: {err}");
                        PlaceTags::unknown()
                    }
                };
                stats.record(&tags);
                Location::new(point, tags)
            })
            .collect();

        Ok(RadialSample { locations, stats })
    }
}
