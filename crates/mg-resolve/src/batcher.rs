//! Sub-matrix decomposition and estimate accumulation.
//!
//! # Tiling
//!
//! For origin count p and destination count q with kernel bound K, the
//! full p×q index space is partitioned row-major into ⌈p/K⌉·⌈q/K⌉ tiles of
//! at most K×K cells.  Each returned cell is recorded under the global
//! index `(tile row base + local row, tile column base + local column)`,
//! so the union of visited global indices covers p×q exactly once.
//!
//! # Failure policy
//!
//! A cell that fails to parse is skipped, logged, and counted — never fatal
//! to the batch.  A whole provider call failing marks that tile's cells
//! skipped (no retry).  Only structural problems (unset endpoints) abort.

use log::{debug, warn};

use mg_core::{ConnId, GeoPoint, LegMode, TransitMode, TravelMode, TripTiming};
use mg_graph::{Estimate, Graph};

use crate::error::ResolveResult;
use crate::provider::{Avoid, MatrixRequest, ProviderError, RouteEstimator, TrafficModel};
use crate::units::{parse_distance_km, parse_duration_min};

/// The provider's documented per-call bound on origins and destinations.
pub const DEFAULT_KERNEL: usize = 10;

/// Outcome accounting for one connection's resolve.
///
/// `resolved + skipped_cells` equals the number of cells the pairing rule
/// selected (p·q for a cross product, min(p, q) for aligned pairs).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Estimates appended to the connection.
    pub resolved:          usize,
    /// Cells lost to parse failures, per-cell provider status, or failed
    /// calls.
    pub skipped_cells:     usize,
    /// Provider calls that failed outright.
    pub provider_failures: usize,
    /// Provider calls issued.
    pub calls:             usize,
}

// ── Tiling ────────────────────────────────────────────────────────────────────

/// One provider-bounded chunk of the index space.
struct Tile {
    row_base:     usize,
    col_base:     usize,
    origins:      Vec<GeoPoint>,
    destinations: Vec<GeoPoint>,
}

/// Query options shared by every tile of one resolve.
struct RequestTemplate {
    mode:         TravelMode,
    transit:      Option<(TransitMode, String)>,
    timing:       Option<TripTiming>,
    avoid:        Vec<Avoid>,
    traffic:      TrafficModel,
}

impl RequestTemplate {
    fn request(&self, tile: &Tile) -> MatrixRequest {
        let mut req = MatrixRequest::new(self.mode, tile.origins.clone(), tile.destinations.clone())
            .avoid(self.avoid.clone())
            .traffic(self.traffic);
        if let Some((mode, line)) = &self.transit {
            req = req.transit(*mode, line.clone());
        }
        if let Some(timing) = self.timing {
            req = req.timing(timing);
        }
        req
    }
}

/// Per-tile processing outcome.
struct TileOutcome {
    estimates:       Vec<Estimate>,
    skipped:         usize,
    provider_failed: bool,
}

// ── QueryBatcher ──────────────────────────────────────────────────────────────

/// Resolves a connection's full origin×destination estimate matrix through
/// provider-bounded sub-matrix calls.
#[derive(Clone, Debug)]
pub struct QueryBatcher {
    kernel:  usize,
    avoid:   Vec<Avoid>,
    traffic: TrafficModel,
}

impl Default for QueryBatcher {
    fn default() -> Self {
        Self::new(DEFAULT_KERNEL)
    }
}

impl QueryBatcher {
    /// A batcher with the given kernel bound K (clamped to ≥ 1).
    pub fn new(kernel: usize) -> Self {
        Self {
            kernel:  kernel.max(1),
            avoid:   Vec::new(),
            traffic: TrafficModel::default(),
        }
    }

    /// Travel restrictions applied to every request.
    pub fn with_avoid(mut self, avoid: Vec<Avoid>) -> Self {
        self.avoid = avoid;
        self
    }

    /// Traffic assumption applied to every request.
    pub fn with_traffic(mut self, traffic: TrafficModel) -> Self {
        self.traffic = traffic;
        self
    }

    /// Resolve every selected (origin, destination) pair of `conn_id` and
    /// append the estimates to the connection.
    ///
    /// Pairing rule: if exactly one endpoint area is catchment-derived from
    /// the other, only index-aligned pairs are queried (the locations were
    /// paired during nearest-stop assignment); otherwise the full cross
    /// product is.
    pub fn resolve(
        &self,
        graph:    &mut Graph,
        conn_id:  ConnId,
        provider: &dyn RouteEstimator,
    ) -> ResolveResult<BatchReport> {
        let (tiles, template) = self.plan(graph, conn_id)?;

        let outcomes: Vec<TileOutcome> = tiles
            .iter()
            .map(|tile| process_tile(tile, &template, provider, conn_id))
            .collect();

        self.commit(graph, conn_id, tiles.len(), outcomes)
    }

    /// Like [`resolve`][Self::resolve], but dispatches the sub-matrix calls
    /// concurrently.  Call ordering is not observable in the result: the
    /// accumulated estimates are appended in deterministic tile order.
    #[cfg(feature = "parallel")]
    pub fn resolve_parallel(
        &self,
        graph:    &mut Graph,
        conn_id:  ConnId,
        provider: &(dyn RouteEstimator + Sync),
    ) -> ResolveResult<BatchReport> {
        use rayon::prelude::*;

        let (tiles, template) = self.plan(graph, conn_id)?;

        let outcomes: Vec<TileOutcome> = tiles
            .par_iter()
            .map(|tile| process_tile(tile, &template, provider, conn_id))
            .collect();

        self.commit(graph, conn_id, tiles.len(), outcomes)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Validate the connection and lay out its tiles.  All structural
    /// failures surface here, before any provider traffic.
    fn plan(
        &self,
        graph:   &Graph,
        conn_id: ConnId,
    ) -> ResolveResult<(Vec<Tile>, RequestTemplate)> {
        let conn = graph.connection(conn_id)?;
        let (origin_area, dest_area) = graph.endpoints(conn)?;
        let aligned = graph.is_index_aligned(conn)?;

        let origins: Vec<GeoPoint> = origin_area.locations.iter().map(|l| l.point).collect();
        let dests: Vec<GeoPoint> = dest_area.locations.iter().map(|l| l.point).collect();

        let template = RequestTemplate {
            mode:    conn.mode.travel_mode(),
            transit: match &conn.mode {
                LegMode::Transit { mode, line } => Some((*mode, line.clone())),
                _ => None,
            },
            timing:  conn.timing(),
            avoid:   self.avoid.clone(),
            traffic: self.traffic,
        };

        let tiles = if aligned {
            // Locations were paired during nearest-stop assignment: query
            // origin[i] ↔ destination[i] only, one cell per call.
            let n = origins.len().min(dests.len());
            debug!("{conn_id}: aligned resolve, {n} pairs");
            (0..n)
                .map(|i| Tile {
                    row_base:     i,
                    col_base:     i,
                    origins:      vec![origins[i]],
                    destinations: vec![dests[i]],
                })
                .collect()
        } else {
            let (p, q, k) = (origins.len(), dests.len(), self.kernel);
            debug!("{conn_id}: cross resolve, {p}x{q} cells, kernel {k}");
            let mut tiles = Vec::new();
            for row_base in (0..p).step_by(k) {
                for col_base in (0..q).step_by(k) {
                    tiles.push(Tile {
                        row_base,
                        col_base,
                        origins:      origins[row_base..(row_base + k).min(p)].to_vec(),
                        destinations: dests[col_base..(col_base + k).min(q)].to_vec(),
                    });
                }
            }
            tiles
        };

        Ok((tiles, template))
    }

    /// Append all tile estimates to the connection and fold the accounting.
    fn commit(
        &self,
        graph:    &mut Graph,
        conn_id:  ConnId,
        calls:    usize,
        outcomes: Vec<TileOutcome>,
    ) -> ResolveResult<BatchReport> {
        let mut report = BatchReport { calls, ..BatchReport::default() };
        let conn = graph.connection_mut(conn_id)?;
        for outcome in outcomes {
            report.resolved += outcome.estimates.len();
            report.skipped_cells += outcome.skipped;
            report.provider_failures += outcome.provider_failed as usize;
            for estimate in outcome.estimates {
                conn.push_estimate(estimate);
            }
        }
        debug!(
            "{conn_id}: resolved {} cells, skipped {}, {} provider failures over {} calls",
            report.resolved, report.skipped_cells, report.provider_failures, report.calls
        );
        Ok(report)
    }
}

/// Issue one provider call and parse its cells into global-indexed
/// estimates.  Never fails: all trouble is folded into the outcome.
fn process_tile(
    tile:     &Tile,
    template: &RequestTemplate,
    provider: &dyn RouteEstimator,
    conn_id:  ConnId,
) -> TileOutcome {
    let expected = tile.origins.len() * tile.destinations.len();

    let response = match provider.estimate_matrix(&template.request(tile)) {
        Ok(response) => response,
        Err(ProviderError::Unavailable(reason)) => {
            warn!(
                "{conn_id}: provider call failed for tile ({}, {}): {reason}",
                tile.row_base, tile.col_base
            );
            return TileOutcome { estimates: Vec::new(), skipped: expected, provider_failed: true };
        }
    };

    let mut estimates = Vec::with_capacity(expected);
    let mut skipped = 0usize;

    for (i, origin) in tile.origins.iter().enumerate() {
        for (j, dest) in tile.destinations.iter().enumerate() {
            let cell = response.rows.get(i).and_then(|row| row.get(j));
            let Some(Some(cell)) = cell else {
                warn!(
                    "{conn_id}: no estimate for cell ({}, {})",
                    tile.row_base + i,
                    tile.col_base + j
                );
                skipped += 1;
                continue;
            };

            let parsed = parse_duration_min(&cell.duration_text)
                .and_then(|t| parse_distance_km(&cell.distance_text).map(|d| (t, d)));
            match parsed {
                Ok((time_min, distance_km)) => estimates.push(Estimate {
                    orig_index:  (tile.row_base + i) as u32,
                    dest_index:  (tile.col_base + j) as u32,
                    time_min,
                    distance_km,
                    origin: *origin,
                    dest:   *dest,
                }),
                Err(err) => {
                    warn!(
                        "{conn_id}: skipping unparseable cell ({}, {}): {err}",
                        tile.row_base + i,
                        tile.col_base + j
                    );
                    skipped += 1;
                }
            }
        }
    }

    TileOutcome { estimates, skipped, provider_failed: false }
}
