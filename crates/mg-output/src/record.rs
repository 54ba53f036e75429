//! Persisted record shapes.
//!
//! These are the exact column sets downstream tooling consumes; field names
//! become CSV headers via serde, so renames here are format changes.

use serde::{Deserialize, Serialize};

use mg_core::GeoPoint;
use mg_trip::Trip;

use crate::error::{OutputError, OutputResult};

/// One area location, flattened under a globally unique node id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NodeRecord {
    pub node_id:      u32,
    pub lat:          f64,
    pub lon:          f64,
    pub municipality: String,
    pub region:       String,
    #[serde(rename = "type")]
    pub place_type:   String,
}

/// One resolved estimate of one connection, with its endpoints denormalized
/// into global node ids and raw coordinates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConnectionRecord {
    pub conn_id:        u32,
    pub origin_node_id: u32,
    pub dest_node_id:   u32,
    pub orig_lat:       f64,
    pub orig_lon:       f64,
    pub dest_lat:       f64,
    pub dest_lon:       f64,
    pub orig_index:     u32,
    pub dest_index:     u32,
    pub time_min:       f64,
    pub distance_km:    f64,
}

/// One sampled trip; the coordinate path is serialized as a single quoted
/// list of `(lat, lon)` pairs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TripRecord {
    pub sample_id:         u32,
    pub time_min:          f64,
    pub distance_km:       f64,
    pub location_gps_list: String,
}

impl From<&Trip> for TripRecord {
    fn from(trip: &Trip) -> Self {
        Self {
            sample_id:         trip.sample_id,
            time_min:          trip.time_min,
            distance_km:       trip.distance_km,
            location_gps_list: format_gps_list(&trip.path),
        }
    }
}

impl TripRecord {
    /// Reconstruct the in-memory trip, parsing the path field.
    pub fn into_trip(self) -> OutputResult<Trip> {
        Ok(Trip {
            sample_id:   self.sample_id,
            time_min:    self.time_min,
            distance_km: self.distance_km,
            path:        parse_gps_list(&self.location_gps_list)?,
        })
    }
}

// ── GPS path field ────────────────────────────────────────────────────────────

/// `[(lat, lon), (lat, lon), …]` — the shape downstream trip tooling parses.
pub fn format_gps_list(path: &[GeoPoint]) -> String {
    let pairs: Vec<String> = path.iter().map(|p| format!("({}, {})", p.lat, p.lon)).collect();
    format!("[{}]", pairs.join(", "))
}

/// Inverse of [`format_gps_list`].
pub fn parse_gps_list(text: &str) -> OutputResult<Vec<GeoPoint>> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| OutputError::Parse(format!("gps list not bracketed: {text:?}")))?
        .trim();
    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split("),")
        .map(|pair| {
            let pair = pair.trim().trim_start_matches('(').trim_end_matches(')');
            let (lat, lon) = pair
                .split_once(',')
                .ok_or_else(|| OutputError::Parse(format!("bad gps pair: {pair:?}")))?;
            let lat: f64 = lat
                .trim()
                .parse()
                .map_err(|_| OutputError::Parse(format!("bad latitude: {lat:?}")))?;
            let lon: f64 = lon
                .trim()
                .parse()
                .map_err(|_| OutputError::Parse(format!("bad longitude: {lon:?}")))?;
            Ok(GeoPoint::new(lat, lon))
        })
        .collect()
}
