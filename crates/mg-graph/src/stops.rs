//! Transit stop reference data and nearest-stop (catchment) assignment.
//!
//! # Spatial index
//!
//! Nearest-stop queries run through an `rstar` R-tree over raw `[lat, lon]`
//! points with squared-Euclidean distance.  Planar distance in degree space
//! is a documented simplification (not great-circle): at city scale and
//! moderate latitudes the argmin stop is the same, and the existing stop
//! assignments were produced under exactly this metric.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use mg_core::{GeoPoint, TransitMode};
use mg_sample::Location;

/// Line key selecting every stop of a transit mode.
pub const ALL_LINES: &str = "all";

// ── Stop registry ─────────────────────────────────────────────────────────────

/// Immutable reference dataset: per transit mode, stop coordinates grouped
/// by line, plus the `"all"` aggregate.
///
/// Built once from externally acquired data (the acquisition itself — an
/// Overpass-style geographic query — is outside this workspace) and passed
/// to [`Graph::new`][crate::Graph::new], so independent networks can carry
/// independent stop tables.
#[derive(Default, Debug, Clone)]
pub struct StopRegistry {
    tables: FxHashMap<TransitMode, FxHashMap<String, Vec<GeoPoint>>>,
}

impl StopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one stop under `line` (and under [`ALL_LINES`]).
    pub fn add_stop(&mut self, mode: TransitMode, line: &str, stop: GeoPoint) {
        let table = self.tables.entry(mode).or_default();
        if line != ALL_LINES {
            table.entry(line.to_string()).or_default().push(stop);
        }
        table.entry(ALL_LINES.to_string()).or_default().push(stop);
    }

    /// The stops of one (mode, line) selection; `None` if nothing is
    /// registered under that key.
    pub fn stops(&self, mode: TransitMode, line: &str) -> Option<&[GeoPoint]> {
        self.tables
            .get(&mode)?
            .get(line)
            .map(Vec::as_slice)
            .filter(|s| !s.is_empty())
    }

    /// Lines registered for `mode`, including [`ALL_LINES`].
    pub fn lines(&self, mode: TransitMode) -> impl Iterator<Item = &str> {
        self.tables
            .get(&mode)
            .into_iter()
            .flat_map(|t| t.keys().map(String::as_str))
    }
}

// ── Nearest-stop assignment ───────────────────────────────────────────────────

/// Entry stored in the R-tree: a `[lat, lon]` point plus its position in the
/// source stop list.
#[derive(Clone)]
struct StopEntry {
    point: [f64; 2],
    pos:   usize,
}

impl RTreeObject for StopEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopEntry {
    /// Squared Euclidean distance in lat/lon space (see module docs).
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

/// For each reference location, the stop (from `stops`) minimizing planar
/// Euclidean distance.  Output order matches `reference` 1:1 — the i-th
/// result serves the i-th reference location.
///
/// Returns an empty vector when `stops` is empty; callers treat that as a
/// registry misconfiguration upstream.
pub fn nearest_stops(reference: &[Location], stops: &[GeoPoint]) -> Vec<GeoPoint> {
    if stops.is_empty() {
        return Vec::new();
    }

    let tree = RTree::bulk_load(
        stops
            .iter()
            .enumerate()
            .map(|(pos, s)| StopEntry { point: s.as_array(), pos })
            .collect(),
    );

    reference
        .iter()
        .map(|loc| match tree.nearest_neighbor(&loc.point.as_array()) {
            Some(entry) => stops[entry.pos],
            // Unreachable: the tree was built from a non-empty stop list.
            None => stops[0],
        })
        .collect()
}
