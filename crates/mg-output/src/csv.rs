//! CSV persistence for the record shapes.
//!
//! [`write_network`] creates `nodes.csv` and `connections.csv` in the
//! configured output directory; trip files are written per chain via
//! [`write_trips`].  All readers accept any `Read` source so tests can use
//! `std::io::Cursor`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::info;

use mg_graph::Graph;
use mg_trip::Trip;

use crate::error::OutputResult;
use crate::record::{ConnectionRecord, NodeRecord, TripRecord};

// ── Flattening ────────────────────────────────────────────────────────────────

/// Flatten a graph into its persisted node and connection records.
///
/// Node ids number every area's locations consecutively in area order, so
/// `origin_node_id = origin area's base + orig_index`.  Unbound, dangling,
/// or unresolved connections contribute no rows — dangling bindings are
/// legal graph state until resolve time, so flattening must not fail on
/// them.
pub fn network_records(graph: &Graph) -> (Vec<NodeRecord>, Vec<ConnectionRecord>) {
    let mut nodes = Vec::new();
    let mut bases = Vec::with_capacity(graph.areas().len());
    for area in graph.areas() {
        bases.push(nodes.len() as u32);
        for location in &area.locations {
            nodes.push(NodeRecord {
                node_id:      nodes.len() as u32,
                lat:          location.point.lat,
                lon:          location.point.lon,
                municipality: location.tags.municipality.clone(),
                region:       location.tags.region.clone(),
                place_type:   location.tags.place_type.clone(),
            });
        }
    }

    let mut connections = Vec::new();
    for conn in graph.connections() {
        if !conn.is_bound() {
            continue;
        }
        let (Some(&origin_base), Some(&dest_base)) =
            (bases.get(conn.origin.index()), bases.get(conn.dest.index()))
        else {
            continue;
        };
        for e in conn.estimates() {
            connections.push(ConnectionRecord {
                conn_id:        conn.id.index() as u32,
                origin_node_id: origin_base + e.orig_index,
                dest_node_id:   dest_base + e.dest_index,
                orig_lat:       e.origin.lat,
                orig_lon:       e.origin.lon,
                dest_lat:       e.dest.lat,
                dest_lon:       e.dest.lon,
                orig_index:     e.orig_index,
                dest_index:     e.dest_index,
                time_min:       e.time_min,
                distance_km:    e.distance_km,
            });
        }
    }

    (nodes, connections)
}

// ── Generic writers / readers ─────────────────────────────────────────────────

pub fn write_nodes<W: Write>(writer: W, records: &[NodeRecord]) -> OutputResult<()> {
    write_records(writer, records)
}

pub fn read_nodes<R: Read>(reader: R) -> OutputResult<Vec<NodeRecord>> {
    read_records(reader)
}

pub fn write_connections<W: Write>(writer: W, records: &[ConnectionRecord]) -> OutputResult<()> {
    write_records(writer, records)
}

pub fn read_connections<R: Read>(reader: R) -> OutputResult<Vec<ConnectionRecord>> {
    read_records(reader)
}

pub fn write_trips<W: Write>(writer: W, trips: &[Trip]) -> OutputResult<()> {
    let records: Vec<TripRecord> = trips.iter().map(TripRecord::from).collect();
    write_records(writer, &records)
}

pub fn read_trips<R: Read>(reader: R) -> OutputResult<Vec<Trip>> {
    read_records::<R, TripRecord>(reader)?
        .into_iter()
        .map(TripRecord::into_trip)
        .collect()
}

fn write_records<W: Write, T: serde::Serialize>(writer: W, records: &[T]) -> OutputResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn read_records<R: Read, T: serde::de::DeserializeOwned>(reader: R) -> OutputResult<Vec<T>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize()
        .map(|result| result.map_err(Into::into))
        .collect()
}

// ── Directory convenience ─────────────────────────────────────────────────────

/// Write `nodes.csv` and `connections.csv` for a resolved graph into `dir`.
pub fn write_network(dir: &Path, graph: &Graph) -> OutputResult<()> {
    let (nodes, connections) = network_records(graph);
    write_nodes(File::create(dir.join("nodes.csv"))?, &nodes)?;
    write_connections(File::create(dir.join("connections.csv"))?, &connections)?;
    info!(
        "wrote {} nodes, {} connection rows to {}",
        nodes.len(),
        connections.len(),
        dir.display()
    );
    Ok(())
}
