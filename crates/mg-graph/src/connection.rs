//! Connections: directed travel legs and their accumulated estimates.

use mg_core::{AreaId, ConnId, GeoPoint, LegMode, TripTiming};

/// One resolved (origin location, destination location) travel estimate.
///
/// Keyed by the location indices within the endpoint areas; coordinates are
/// carried redundantly so trip stitching and persistence never need to look
/// the areas back up.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Estimate {
    pub orig_index:  u32,
    pub dest_index:  u32,
    pub time_min:    f64,
    pub distance_km: f64,
    pub origin:      GeoPoint,
    pub dest:        GeoPoint,
}

/// A directed travel leg between two areas.
///
/// Endpoints may be unset (`AreaId::INVALID`) at creation and bound later;
/// any resolve or sampling operation on a connection with an unset endpoint
/// fails explicitly rather than guessing.
#[derive(Clone, Debug)]
pub struct Connection {
    pub id:     ConnId,
    pub name:   String,
    pub origin: AreaId,
    pub dest:   AreaId,
    pub mode:   LegMode,
    timing:     Option<TripTiming>,
    estimates:  Vec<Estimate>,
}

impl Connection {
    pub fn new(id: ConnId, name: impl Into<String>, mode: LegMode) -> Self {
        Self {
            id,
            name: name.into(),
            origin: AreaId::INVALID,
            dest:   AreaId::INVALID,
            mode,
            timing: None,
            estimates: Vec::new(),
        }
    }

    /// Bind (or rebind) the endpoints.  Passing `AreaId::INVALID` leaves the
    /// corresponding endpoint unchanged.
    pub fn bind(&mut self, origin: AreaId, dest: AreaId) {
        if origin.is_set() {
            self.origin = origin;
        }
        if dest.is_set() {
            self.dest = dest;
        }
    }

    /// `true` once both endpoints are bound.
    pub fn is_bound(&self) -> bool {
        self.origin.is_set() && self.dest.is_set()
    }

    /// Set the departure-or-arrival constraint.  A connection carries at
    /// most one timing; a second call is a no-op, not an error.
    pub fn set_timing(&mut self, timing: TripTiming) {
        if self.timing.is_none() {
            self.timing = Some(timing);
        }
    }

    pub fn timing(&self) -> Option<TripTiming> {
        self.timing
    }

    /// Append one resolved estimate.  Accumulation is append-only and
    /// unordered; duplicates are the caller's responsibility to avoid.
    pub fn push_estimate(&mut self, estimate: Estimate) {
        self.estimates.push(estimate);
    }

    pub fn estimates(&self) -> &[Estimate] {
        &self.estimates
    }
}
