//! Geographic locations with qualitative tags, and tag-count diagnostics.

use rustc_hash::FxHashMap;

use mg_core::GeoPoint;

/// Sentinel value for any tag field a geocoder could not resolve.
///
/// Lookup failures are never silently discarded errors; they surface as
/// this explicit placeholder (and a debug-level log line at the call site).
pub const UNKNOWN_TAG: &str = "unknown";

/// Best-effort qualitative information about a place.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceTags {
    /// Kind of place: house, shop, park, "metro_stop", …
    pub place_type:   String,
    pub municipality: String,
    pub region:       String,
}

impl PlaceTags {
    pub fn new(place_type: impl Into<String>, municipality: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            place_type:   place_type.into(),
            municipality: municipality.into(),
            region:       region.into(),
        }
    }

    /// All fields set to [`UNKNOWN_TAG`].
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_TAG, UNKNOWN_TAG, UNKNOWN_TAG)
    }
}

impl Default for PlaceTags {
    fn default() -> Self {
        Self::unknown()
    }
}

/// An immutable geographic point with its qualitative tags.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub point: GeoPoint,
    pub tags:  PlaceTags,
}

impl Location {
    pub fn new(point: GeoPoint, tags: PlaceTags) -> Self {
        Self { point, tags }
    }

    /// A location with no resolved tags.
    pub fn untagged(point: GeoPoint) -> Self {
        Self::new(point, PlaceTags::unknown())
    }
}

// ── Tag statistics ────────────────────────────────────────────────────────────

/// Per-category counts of tag values across one sample.  Diagnostic only —
/// nothing downstream consumes these; they exist so a run can be eyeballed
/// for geocoding quality.
#[derive(Default, Debug, Clone)]
pub struct TagStatistics {
    pub place_type:   FxHashMap<String, u32>,
    pub municipality: FxHashMap<String, u32>,
    pub region:       FxHashMap<String, u32>,
}

impl TagStatistics {
    pub fn record(&mut self, tags: &PlaceTags) {
        *self.place_type.entry(tags.place_type.clone()).or_insert(0) += 1;
        *self.municipality.entry(tags.municipality.clone()).or_insert(0) += 1;
        *self.region.entry(tags.region.clone()).or_insert(0) += 1;
    }

    /// Total locations recorded (every category counts each once).
    pub fn total(&self) -> u32 {
        self.place_type.values().sum()
    }
}
