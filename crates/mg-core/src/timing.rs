//! Departure/arrival timing constraint for scheduled legs.
//!
//! A connection carries *at most one* of a departure time or an arrival
//! time.  The exclusivity is enforced where the constraint is stored (see
//! `Connection::set_timing` in `mg-graph`): the second attempt to set a
//! timing is a no-op, not an error.

/// A scheduling constraint for a transit leg, as a unix timestamp (seconds).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TripTiming {
    /// Leave the origin at this time.
    DepartAt(u64),
    /// Be at the destination by this time.
    ArriveBy(u64),
}

impl TripTiming {
    /// The raw unix timestamp, whichever variant holds it.
    #[inline]
    pub fn unix_secs(self) -> u64 {
        match self {
            TripTiming::DepartAt(t) | TripTiming::ArriveBy(t) => t,
        }
    }

    /// Provider query field name for this constraint.
    pub fn field_name(self) -> &'static str {
        match self {
            TripTiming::DepartAt(_) => "departure_time",
            TripTiming::ArriveBy(_) => "arrival_time",
        }
    }
}
