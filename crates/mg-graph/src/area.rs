//! Areas: named regions owning an ordered list of representative locations.

use mg_core::{AreaId, GeoPoint, TransitMode};
use mg_sample::Location;

/// How an area obtained its locations.
#[derive(Clone, Debug, PartialEq)]
pub enum AreaKind {
    /// Rejection-sampled from a disc around `center`.
    Sampled {
        center:    GeoPoint,
        radius_km: f64,
        target:    usize,
    },
    /// Derived from another area by nearest-stop assignment: this area's
    /// i-th location is the stop nearest to the catchment area's i-th
    /// location.  That index correspondence is load-bearing — the resolve
    /// phase queries aligned pairs only.
    Catchment {
        of:   AreaId,
        mode: TransitMode,
        line: String,
    },
    /// Locations supplied verbatim by the caller.
    Fixed,
}

/// A named region or stop set owning an ordered list of locations.
///
/// Areas are created once during graph assembly and read-only afterwards.
#[derive(Clone, Debug)]
pub struct Area {
    pub id:        AreaId,
    pub name:      String,
    pub kind:      AreaKind,
    pub locations: Vec<Location>,
}

impl Area {
    /// `true` if this area was catchment-derived from `other`.
    pub fn is_catchment_of(&self, other: AreaId) -> bool {
        matches!(self.kind, AreaKind::Catchment { of, .. } if of == other)
    }

    /// `true` for any catchment-derived area.
    pub fn is_catchment(&self) -> bool {
        matches!(self.kind, AreaKind::Catchment { .. })
    }
}
