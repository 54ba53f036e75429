//! `mg-graph` — the area/connection mobility graph.
//!
//! A [`Graph`] owns an append-only collection of [`Area`]s (named regions
//! holding representative [`Location`][mg_sample::Location]s) and
//! [`Connection`]s (directed travel legs between two areas with a mode).
//! Scheduled transit between two areas is composed as a uniform three-leg
//! shape — access, transit, egress — so every modal combination flows
//! through the same resolve and trip-sampling machinery downstream.
//!
//! | Module         | Contents                                          |
//! |----------------|---------------------------------------------------|
//! | [`area`]       | `Area`, `AreaKind`                                |
//! | [`connection`] | `Connection`, `Estimate`                          |
//! | [`stops`]      | `StopRegistry`, nearest-stop assignment           |
//! | [`graph`]      | `Graph` assembly and transit composition          |
//! | [`error`]      | `GraphError`                                      |

pub mod area;
pub mod connection;
pub mod error;
pub mod graph;
pub mod stops;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use area::{Area, AreaKind};
pub use connection::{Connection, Estimate};
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use stops::{nearest_stops, StopRegistry, ALL_LINES};
