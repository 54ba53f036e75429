//! nordhavn — multi-modal travel-effort study of the Nordhavn district.
//!
//! Builds the Nordhavn mobility graph (inner harbour disc, wider frontier
//! disc, central Copenhagen disc), resolves walk/bike/bus/metro effort
//! through a synthetic routing provider, samples trips over each resolved
//! chain, and writes the network and trip CSVs to `output/nordhavn/`.

mod network;

use std::fs::File;
use std::path::Path;

use anyhow::Result;

use mg_core::{ConnId, GeoPoint, SampleRng, TripTiming};
use mg_graph::{Graph, ALL_LINES};
use mg_resolve::QueryBatcher;
use mg_sample::NullGeocoder;
use mg_trip::TripSampler;

use network::{cph_central_zones, nordhavn_zones, stop_registry, SpeedEstimator};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64   = 42;
const SAMPLES:        usize = 30;    // locations per disc
const TRIPS:          usize = 2_000; // trips per chain
/// 2025-04-01 09:00 UTC — a weekday morning commute.
const DEPART_UNIX:    u64   = 1_743_498_000;

const NORDHAVN:    GeoPoint = GeoPoint { lat: 55.709932771398556, lon: 12.599082813887355 };
const CPH_CENTRAL: GeoPoint = GeoPoint { lat: 55.67157021678844, lon: 12.564402972197449 };

fn main() -> Result<()> {
    env_logger::init();

    println!("=== nordhavn — rust_mg travel-effort study ===");
    println!("Discs: {SAMPLES} locations each  |  Trips: {TRIPS} per chain  |  Seed: {SEED}");
    println!();

    // 1. Stop tables and graph.
    let registry = stop_registry()?;
    let mut graph = Graph::new("nordhavn", registry);
    let mut rng = SampleRng::new(SEED);
    let geocoder = NullGeocoder;

    // 2. Sampled areas.
    let inner = graph.area_sampled(
        "inner", NORDHAVN, 0.75, SAMPLES, &nordhavn_zones(), &geocoder, &mut rng,
    )?;
    let frontier = graph.area_sampled(
        "frontier", NORDHAVN, 1.5, SAMPLES, &nordhavn_zones(), &geocoder, &mut rng,
    )?;
    let cph_central = graph.area_sampled(
        "cph_central", CPH_CENTRAL, 0.75, SAMPLES, &cph_central_zones(), &geocoder, &mut rng,
    )?;
    println!("Sampled {} areas", graph.areas().len());

    // 3. Connections.
    let walkability = graph.connect_walk("walk", inner, frontier);
    let bikeability = graph.connect_bike("bike", inner, frontier);

    let depart = TripTiming::DepartAt(DEPART_UNIX);
    let local_access = graph.connection_unbound("local_access", mg_core::LegMode::Walk);
    let local_egress = graph.connection_unbound("local_egress", mg_core::LegMode::Walk);
    let local_transit = graph.compose_bus(
        "local", inner, local_access, frontier, local_egress, ALL_LINES, depart,
    )?;

    let commute_access = graph.connection_unbound("commute_access", mg_core::LegMode::Walk);
    let commute_egress = graph.connection_unbound("commute_egress", mg_core::LegMode::Walk);
    let city_commute = graph.compose_metro(
        "commute", inner, commute_access, cph_central, commute_egress, ALL_LINES, depart,
    )?;
    println!(
        "Wired {} connections across {} areas",
        graph.connections().len(),
        graph.areas().len()
    );

    // 4. Resolve every leg through the synthetic provider.
    let batcher = QueryBatcher::default();
    let mut to_resolve: Vec<ConnId> = vec![walkability, bikeability];
    to_resolve.extend(local_transit);
    to_resolve.extend(city_commute);

    for conn_id in &to_resolve {
        let report = batcher.resolve(&mut graph, *conn_id, &SpeedEstimator)?;
        let name = &graph.connection(*conn_id)?.name;
        println!(
            "  resolved {name:<16} {} cells in {} calls ({} skipped)",
            report.resolved, report.calls, report.skipped_cells
        );
    }

    // 5. Sample trips over each chain.
    let sampler = TripSampler::new();
    let chains: [(&str, Vec<ConnId>); 4] = [
        ("walk", vec![walkability]),
        ("bike", vec![bikeability]),
        ("local", local_transit.to_vec()),
        ("commute", city_commute.to_vec()),
    ];

    std::fs::create_dir_all("output/nordhavn")?;
    let out_dir = Path::new("output/nordhavn");

    println!();
    for (label, chain) in &chains {
        let mut chain_rng = rng.child(chain[0].index() as u64);
        let report = sampler.sample(&graph, chain, TRIPS, &mut chain_rng)?;

        let mean_time: f64 =
            report.trips.iter().map(|t| t.time_min).sum::<f64>() / report.trips.len().max(1) as f64;
        println!(
            "  {label:<8} {} trips ({} disconnected), mean {:.1} min",
            report.trips.len(),
            report.failed,
            mean_time
        );

        mg_output::write_trips(
            File::create(out_dir.join(format!("trips_{label}.csv")))?,
            &report.trips,
        )?;
    }

    // 6. Persist the resolved network.
    mg_output::write_network(out_dir, &graph)?;
    println!();
    println!("Output written to {}", out_dir.display());

    Ok(())
}
