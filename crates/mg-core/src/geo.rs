//! Geographic coordinate type and spherical projection.
//!
//! `GeoPoint` uses `f64` latitude/longitude in degrees.  Double precision is
//! deliberate: trip stitching matches leg endpoints by exact coordinate
//! equality, and coordinates must survive a CSV round-trip unchanged, so the
//! ~1 m rounding of `f32` would silently break path continuity.

/// Mean Earth radius in kilometres used by all spherical formulas here.
pub const EARTH_RADIUS_KM: f64 = 6378.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Spherical forward-bearing projection: the point `radius_km` away from
    /// `self` along `bearing_rad` (radians, clockwise from north).
    ///
    /// Inverse-ish of [`distance_km`][Self::distance_km]: projecting and then
    /// measuring returns `radius_km` to within float rounding.
    pub fn project(self, radius_km: f64, bearing_rad: f64) -> GeoPoint {
        let lat0 = self.lat.to_radians();
        let lon0 = self.lon.to_radians();
        let frac = radius_km / EARTH_RADIUS_KM;

        let lat1 = (lat0.sin() * frac.cos() + lat0.cos() * frac.sin() * bearing_rad.cos()).asin();
        let lon1 = lon0
            + (bearing_rad.sin() * frac.sin() * lat0.cos())
                .atan2(frac.cos() - lat0.sin() * lat1.sin());

        GeoPoint::new(lat1.to_degrees(), lon1.to_degrees())
    }

    /// The `[lat, lon]` array form used by spatial indexes.
    #[inline]
    pub fn as_array(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
