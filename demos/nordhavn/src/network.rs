//! Nordhavn network fixtures: exclusion-zone tables, embedded stop tables,
//! and a synthetic routing provider.
//!
//! The zone tables are planar km offsets from each disc's center; each row
//! is one convex quad `(x0,y0,x1,y1,x2,y2,x3,y3)` masking water or rail
//! yards from the sampler.

use std::io::Cursor;

use mg_core::{GeoPoint, TransitMode, TravelMode};
use mg_graph::StopRegistry;
use mg_output::load_stops_reader;
use mg_resolve::{MatrixCell, MatrixRequest, MatrixResponse, ProviderError, RouteEstimator};
use mg_sample::ExclusionZone;

// ── Exclusion zones ───────────────────────────────────────────────────────────

/// Harbour basins and rail yards around the Nordhavn discs.
const NORDHAVN_AVOID: [[f64; 8]; 7] = [
    [-0.380, 0.650, -0.323, 0.830, -0.828, 0.713, -0.730, 0.466],
    [-0.384, 0.636, -0.490, 0.677, -0.655, 0.266, -0.586, 0.160],
    [-0.390, 0.047, -0.593, 0.413, -0.655, 0.266, -0.515, -0.014],
    [0.090, 1.183, 0.306, 2.246, -0.950, 1.166, -0.902, 0.850],
    [-0.310, 0.810, -0.097, 1.247, -0.420, 1.00, -0.420, 0.842],
    [0.317, 0.934, 0.370, 1.074, -0.118, 1.242, -0.176, 1.068],
    [1.656, -1.488, 1.523, 0.523, -0.005, -0.621, -0.235, -1.487],
];

/// Lakes and harbour front around the central-Copenhagen disc.
const CPH_CENTRAL_AVOID: [[f64; 8]; 4] = [
    [-0.111, -0.754, 0.192, -0.324, 0.108, -0.304, -0.272, -0.750],
    [0.182, -0.342, 0.207, -0.120, 0.112, -0.091, 0.089, -0.330],
    [0.204, -0.134, 0.177, -0.046, 0.112, -0.091, 0.110, -0.110],
    [0.197, -0.012, 0.084, 0.169, -0.022, 0.094, 0.800, -0.081],
];

pub fn nordhavn_zones() -> Vec<ExclusionZone> {
    NORDHAVN_AVOID.iter().map(|q| ExclusionZone::from_flat(*q)).collect()
}

pub fn cph_central_zones() -> Vec<ExclusionZone> {
    CPH_CENTRAL_AVOID.iter().map(|q| ExclusionZone::from_flat(*q)).collect()
}

// ── Stop tables ───────────────────────────────────────────────────────────────

// Bus stops along the Nordhavn corridor.
const BUS_STOPS_CSV: &str = "\
lat,lon,id\n\
55.7063,12.5921,27\n\
55.7101,12.5965,27\n\
55.7148,12.6042,27\n\
55.7055,12.5873,164\n\
55.7112,12.5899,164\n\
55.7169,12.5967,164\n\
";

// M4 stations Nordhavn → city centre.
const METRO_STOPS_CSV: &str = "\
lat,lon,id\n\
55.7074,12.5892,M4\n\
55.7120,12.6004,M4\n\
55.6987,12.5851,M4\n\
55.6867,12.5858,M4\n\
55.6733,12.5656,M4\n\
";

/// Registry holding the bus and metro stop tables.
pub fn stop_registry() -> anyhow::Result<StopRegistry> {
    let mut registry = StopRegistry::new();
    load_stops_reader(&mut registry, TransitMode::Bus, Cursor::new(BUS_STOPS_CSV))?;
    load_stops_reader(&mut registry, TransitMode::Subway, Cursor::new(METRO_STOPS_CSV))?;
    Ok(registry)
}

// ── Synthetic routing provider ────────────────────────────────────────────────

/// Deterministic stand-in for the remote distance-matrix service: straight
/// great-circle distance at a per-mode speed, with a fixed transit wait.
/// Emits the provider's human-readable text shapes ("1 hour 5 mins",
/// "800 m") so the full normalization path is exercised.
pub struct SpeedEstimator;

impl SpeedEstimator {
    fn speed_kmh(mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Walk    => 4.8,
            TravelMode::Bike    => 15.0,
            TravelMode::Drive   => 30.0,
            TravelMode::Transit => 28.0,
        }
    }

    fn cell(mode: TravelMode, origin: GeoPoint, dest: GeoPoint) -> MatrixCell {
        let distance_km = origin.distance_km(dest);
        let mut minutes = distance_km / Self::speed_kmh(mode) * 60.0;
        if mode == TravelMode::Transit {
            minutes += 5.0; // fixed headway wait
        }

        let duration_text = if minutes >= 60.0 {
            let hours = (minutes / 60.0).floor();
            format!("{hours} hours {:.0} mins", minutes - hours * 60.0)
        } else {
            format!("{minutes:.1} mins")
        };
        let distance_text = if distance_km < 1.0 {
            format!("{:.0} m", distance_km * 1000.0)
        } else {
            format!("{distance_km:.2} km")
        };

        MatrixCell { duration_text, distance_text }
    }
}

impl RouteEstimator for SpeedEstimator {
    fn estimate_matrix(&self, req: &MatrixRequest) -> Result<MatrixResponse, ProviderError> {
        let rows = req
            .origins
            .iter()
            .map(|o| {
                req.destinations
                    .iter()
                    .map(|d| Some(Self::cell(req.mode, *o, *d)))
                    .collect()
            })
            .collect();
        Ok(MatrixResponse { rows })
    }
}
