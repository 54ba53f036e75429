//! Travel mode enums shared across all `mg-*` crates.
//!
//! The string forms returned by `as_str` are the routing provider's query
//! vocabulary, so they double as wire values in `mg-resolve` and as column
//! values in `mg-output`.

/// The means by which one leg of a trip is travelled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelMode {
    Drive,
    Walk,
    Bike,
    /// Scheduled public transit; the sub-mode and line live in [`LegMode`].
    Transit,
}

impl TravelMode {
    /// Provider query value.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Drive   => "driving",
            TravelMode::Walk    => "walking",
            TravelMode::Bike    => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of scheduled transit used between two stop areas.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitMode {
    Bus,
    Subway,
    Train,
    Tram,
    /// Train, tram, light rail, and subway together (everything but bus).
    Rail,
}

impl TransitMode {
    /// Provider query value.
    pub fn as_str(self) -> &'static str {
        match self {
            TransitMode::Bus    => "bus",
            TransitMode::Subway => "subway",
            TransitMode::Train  => "train",
            TransitMode::Tram   => "tram",
            TransitMode::Rail   => "rail",
        }
    }

    /// Short label used when naming synthetic stop areas ("metro_stop" etc.).
    pub fn stop_label(self) -> &'static str {
        match self {
            TransitMode::Bus    => "bus",
            TransitMode::Subway => "metro",
            TransitMode::Train  => "train",
            TransitMode::Tram   => "tram",
            TransitMode::Rail   => "rail",
        }
    }
}

impl std::fmt::Display for TransitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fully specified mode of one directed connection.
///
/// Simple modes carry nothing; a transit leg names its sub-mode and line
/// (`"all"` selects every line of that sub-mode).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegMode {
    Walk,
    Bike,
    Drive,
    Transit { mode: TransitMode, line: String },
}

impl LegMode {
    /// The provider-facing travel mode of this leg.
    pub fn travel_mode(&self) -> TravelMode {
        match self {
            LegMode::Walk         => TravelMode::Walk,
            LegMode::Bike         => TravelMode::Bike,
            LegMode::Drive        => TravelMode::Drive,
            LegMode::Transit { .. } => TravelMode::Transit,
        }
    }

    /// The transit sub-mode, if this is a transit leg.
    pub fn transit_mode(&self) -> Option<TransitMode> {
        match self {
            LegMode::Transit { mode, .. } => Some(*mode),
            _ => None,
        }
    }
}
