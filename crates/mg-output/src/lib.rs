//! `mg-output` — persisted record shapes and their CSV plumbing.
//!
//! Three record shapes round-trip exactly: node records (one per area
//! location, under global node ids), connection records (one per resolved
//! estimate), and trip records (one per sampled trip, with the coordinate
//! path packed into a single quoted field).  A loader for the transit stop
//! table shape `(lat, lon, id)` feeds a [`mg_graph::StopRegistry`].

pub mod csv;
pub mod error;
pub mod record;
pub mod stops;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::{
    network_records, read_connections, read_nodes, read_trips, write_connections, write_network,
    write_nodes, write_trips,
};
pub use error::{OutputError, OutputResult};
pub use record::{
    format_gps_list, parse_gps_list, ConnectionRecord, NodeRecord, TripRecord,
};
pub use stops::{load_stops_csv, load_stops_reader};
