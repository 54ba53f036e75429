//! The routing-estimate provider seam.
//!
//! The real provider is a remote distance-matrix service (auth, HTTP, and
//! rate limits live outside this workspace).  `mg-resolve` only depends on
//! the [`RouteEstimator`] trait; tests and demos plug in synthetic
//! implementations.
//!
//! Every query option is an explicit typed field of [`MatrixRequest`] —
//! one field per provider parameter — rather than string-keyed or
//! type-dispatched parameters.

use thiserror::Error;

use mg_core::{GeoPoint, TransitMode, TravelMode, TripTiming};

/// Format a coordinate the way the provider's query parameters expect.
pub fn coord_param(p: GeoPoint) -> String {
    format!("{},{}", p.lat, p.lon)
}

/// A travel restriction the provider should honor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Avoid {
    Tolls,
    Highways,
    Ferries,
    Indoor,
}

impl Avoid {
    pub fn as_str(self) -> &'static str {
        match self {
            Avoid::Tolls    => "tolls",
            Avoid::Highways => "highways",
            Avoid::Ferries  => "ferries",
            Avoid::Indoor   => "indoor",
        }
    }
}

/// The traffic assumption applied to time estimates.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum TrafficModel {
    /// Most accurate guess given traffic history.
    #[default]
    BestGuess,
    /// Worst case given traffic history.
    Pessimistic,
    /// Best case given traffic history.
    Optimistic,
}

impl TrafficModel {
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficModel::BestGuess   => "best_guess",
            TrafficModel::Pessimistic => "pessimistic",
            TrafficModel::Optimistic  => "optimistic",
        }
    }
}

// ── Request / response ────────────────────────────────────────────────────────

/// One provider call: a sub-matrix of at most K×K coordinate pairs plus the
/// query options shared by every cell.
#[derive(Clone, Debug)]
pub struct MatrixRequest {
    pub origins:      Vec<GeoPoint>,
    pub destinations: Vec<GeoPoint>,
    pub mode:         TravelMode,
    /// Transit sub-mode, for `mode == Transit`.
    pub transit_mode: Option<TransitMode>,
    /// Transit line selector (`"all"` or a specific line id).
    pub transit_line: Option<String>,
    /// At most one of departure/arrival time.
    pub timing:       Option<TripTiming>,
    pub avoid:        Vec<Avoid>,
    pub traffic:      TrafficModel,
}

impl MatrixRequest {
    pub fn new(mode: TravelMode, origins: Vec<GeoPoint>, destinations: Vec<GeoPoint>) -> Self {
        Self {
            origins,
            destinations,
            mode,
            transit_mode: None,
            transit_line: None,
            timing: None,
            avoid: Vec::new(),
            traffic: TrafficModel::default(),
        }
    }

    pub fn transit(mut self, mode: TransitMode, line: impl Into<String>) -> Self {
        self.transit_mode = Some(mode);
        self.transit_line = Some(line.into());
        self
    }

    pub fn timing(mut self, timing: TripTiming) -> Self {
        self.timing = Some(timing);
        self
    }

    pub fn avoid(mut self, avoid: Vec<Avoid>) -> Self {
        self.avoid = avoid;
        self
    }

    pub fn traffic(mut self, traffic: TrafficModel) -> Self {
        self.traffic = traffic;
        self
    }
}

/// One cell of a provider response: distance and duration as the provider's
/// human-readable `value + unit` text (e.g. `"7.3 km"`, `"1 hour 20 mins"`).
/// Normalization happens on our side, in [`crate::units`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixCell {
    pub distance_text: String,
    pub duration_text: String,
}

/// A full response: `rows[i][j]` estimates origin `i` → destination `j`.
/// `None` cells are the provider's per-cell failure status.
#[derive(Clone, Debug, Default)]
pub struct MatrixResponse {
    pub rows: Vec<Vec<Option<MatrixCell>>>,
}

/// Errors a provider call may report.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network or auth failure.  The affected sub-matrix is marked
    /// incomplete; there is no automatic retry.
    #[error("routing provider unavailable: {0}")]
    Unavailable(String),
}

/// A provider of origin×destination travel estimates.
///
/// One call per sub-matrix; implementations must not assume more than
/// [`crate::DEFAULT_KERNEL`] origins or destinations unless they advertise
/// a larger bound to the batcher.
pub trait RouteEstimator {
    fn estimate_matrix(&self, request: &MatrixRequest) -> Result<MatrixResponse, ProviderError>;
}
