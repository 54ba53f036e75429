//! Transit stop table loader.
//!
//! # CSV format
//!
//! One row per stop; `id` is the line identifier the stop belongs to.
//!
//! ```csv
//! lat,lon,id
//! 55.6761,12.5683,M1
//! 55.6794,12.5867,M1
//! 55.6730,12.5640,5C
//! ```
//!
//! Loading also feeds the registry's `"all"` aggregate per mode.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use mg_core::{GeoPoint, TransitMode};
use mg_graph::StopRegistry;

use crate::error::OutputResult;

#[derive(Deserialize)]
struct StopRecord {
    lat: f64,
    lon: f64,
    id:  String,
}

/// Load one mode's stop table from a CSV file into `registry`.
/// Returns the number of stops loaded.
pub fn load_stops_csv(
    registry: &mut StopRegistry,
    mode:     TransitMode,
    path:     &Path,
) -> OutputResult<usize> {
    load_stops_reader(registry, mode, std::fs::File::open(path)?)
}

/// Like [`load_stops_csv`] but accepts any `Read` source.
pub fn load_stops_reader<R: Read>(
    registry: &mut StopRegistry,
    mode:     TransitMode,
    reader:   R,
) -> OutputResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut count = 0;
    for result in csv_reader.deserialize::<StopRecord>() {
        let row = result?;
        registry.add_stop(mode, &row.id, GeoPoint::new(row.lat, row.lon));
        count += 1;
    }
    Ok(count)
}
