//! Randomized continuous trips over a resolved connection chain.
//!
//! A chain of connections describes one logical journey leg by leg.  Once
//! every leg carries resolved estimates, the chain spans a tree of depth
//! equal to the chain length: the first leg's pairs are the roots, and each
//! subsequent layer's viable pairs are those whose origin coordinate equals
//! the coordinate the previous layer reached.  One trip is one uniformly
//! random root-to-leaf walk through that tree.

use log::{debug, warn};

use mg_core::{ConnId, GeoPoint, SampleRng};
use mg_graph::{Estimate, Graph};

use crate::error::{TripError, TripResult};

/// One synthetic trip: cumulative effort plus the full coordinate path.
///
/// The path has one more point than the chain has legs — the first leg
/// contributes its origin and destination, every later leg only its
/// destination.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub sample_id:   u32,
    pub time_min:    f64,
    pub distance_km: f64,
    pub path:        Vec<GeoPoint>,
}

/// Outcome of one sampling run: the successful trips plus the count of
/// trips lost to [`TripError::DisconnectedPath`].
#[derive(Debug, Default)]
pub struct SampleReport {
    pub trips:  Vec<Trip>,
    pub failed: usize,
}

// ── TripSampler ───────────────────────────────────────────────────────────────

/// Draws independent random trips across an ordered connection chain.
///
/// Stateless apart from configuration; randomness comes from the
/// caller-supplied [`SampleRng`], so runs replay from their seed.
#[derive(Clone, Debug, Default)]
pub struct TripSampler;

impl TripSampler {
    pub fn new() -> Self {
        Self
    }

    /// Sample `n` independent trips across `chain`.
    ///
    /// Structural problems (empty chain, dangling or unbound connections, a
    /// leg with no resolved pairs) abort the run.  A trip that reaches a
    /// coordinate no next-leg pair starts from fails alone and is counted
    /// in the report.
    pub fn sample(
        &self,
        graph: &Graph,
        chain: &[ConnId],
        n:     usize,
        rng:   &mut SampleRng,
    ) -> TripResult<SampleReport> {
        let legs = self.plan(graph, chain)?;

        let mut report = SampleReport::default();
        for sample_id in 0..n as u32 {
            match draw_trip(&legs, sample_id, rng) {
                Ok(trip) => report.trips.push(trip),
                Err(err @ TripError::DisconnectedPath { .. }) => {
                    warn!("trip {sample_id}: {err}");
                    report.failed += 1;
                }
                Err(err) => return Err(err),
            }
        }
        debug!(
            "sampled {} trips over {} legs ({} disconnected)",
            report.trips.len(),
            legs.len(),
            report.failed
        );
        Ok(report)
    }

    /// Validate the chain and borrow each leg's estimates.  All structural
    /// failures surface here, before the first draw.
    fn plan<'g>(&self, graph: &'g Graph, chain: &[ConnId]) -> TripResult<Vec<Leg<'g>>> {
        if chain.is_empty() {
            return Err(TripError::EmptyChain);
        }
        chain
            .iter()
            .map(|&id| {
                let conn = graph.connection(id)?;
                graph.endpoints(conn)?;
                if conn.estimates().is_empty() {
                    return Err(TripError::NoPairs { conn: id });
                }
                Ok(Leg { id, estimates: conn.estimates() })
            })
            .collect()
    }
}

struct Leg<'g> {
    id:        ConnId,
    estimates: &'g [Estimate],
}

/// One root-to-leaf walk: uniform pick on the first leg, then a uniform
/// pick among the continuing pairs of each later leg.  Coordinates are
/// matched exactly — catchment derivation reuses stop coordinates verbatim,
/// so legs that should connect share bit-identical points.
fn draw_trip(legs: &[Leg<'_>], sample_id: u32, rng: &mut SampleRng) -> TripResult<Trip> {
    let first = rng
        .choose(legs[0].estimates)
        .ok_or(TripError::NoPairs { conn: legs[0].id })?;

    let mut trip = Trip {
        sample_id,
        time_min:    first.time_min,
        distance_km: first.distance_km,
        path:        vec![first.origin, first.dest],
    };

    for (leg_index, leg) in legs.iter().enumerate().skip(1) {
        let reached = *trip.path.last().unwrap_or(&first.dest);
        let viable: Vec<&Estimate> = leg
            .estimates
            .iter()
            .filter(|e| e.origin == reached)
            .collect();
        let next = *rng.choose(&viable).ok_or(TripError::DisconnectedPath {
            conn: leg.id,
            leg:  leg_index,
        })?;

        trip.time_min += next.time_min;
        trip.distance_km += next.distance_km;
        trip.path.push(next.dest);
    }

    Ok(trip)
}
