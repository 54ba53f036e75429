//! Graph assembly: areas, connections, and three-leg transit composition.

use log::{debug, info};

use mg_core::{AreaId, ConnId, GeoPoint, LegMode, SampleRng, TransitMode, TripTiming};
use mg_sample::{ExclusionZone, Geocoder, Location, LocationSampler, PlaceTags};

use crate::area::{Area, AreaKind};
use crate::connection::Connection;
use crate::error::{GraphError, GraphResult};
use crate::stops::{nearest_stops, StopRegistry};

/// The mobility graph: append-only areas and connections, the stop
/// reference tables, and the sampler used to populate sampled areas.
///
/// State only grows — there is no deletion.  Areas and connections are
/// created during assembly, populated during resolve, then read-only.
pub struct Graph {
    pub name:   String,
    areas:       Vec<Area>,
    connections: Vec<Connection>,
    stops:       StopRegistry,
    sampler:     LocationSampler,
}

impl Graph {
    pub fn new(name: impl Into<String>, stops: StopRegistry) -> Self {
        Self {
            name: name.into(),
            areas: Vec::new(),
            connections: Vec::new(),
            stops,
            sampler: LocationSampler::default(),
        }
    }

    /// Replace the default sampler (e.g. to lower the attempt cap in tests).
    pub fn with_sampler(mut self, sampler: LocationSampler) -> Self {
        self.sampler = sampler;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn area(&self, id: AreaId) -> GraphResult<&Area> {
        self.areas.get(id.index()).ok_or(GraphError::AreaNotFound(id))
    }

    pub fn connection(&self, id: ConnId) -> GraphResult<&Connection> {
        self.connections
            .get(id.index())
            .ok_or(GraphError::ConnNotFound(id))
    }

    pub fn connection_mut(&mut self, id: ConnId) -> GraphResult<&mut Connection> {
        self.connections
            .get_mut(id.index())
            .ok_or(GraphError::ConnNotFound(id))
    }

    /// Both endpoint areas of a connection.  Fails with
    /// [`GraphError::EndpointMissing`] if either endpoint is unset or
    /// dangling — the caller's operation must abort, since continuing would
    /// produce meaningless results.
    pub fn endpoints(&self, conn: &Connection) -> GraphResult<(&Area, &Area)> {
        if !conn.is_bound() {
            return Err(GraphError::EndpointMissing { conn: conn.id });
        }
        let origin = self
            .areas
            .get(conn.origin.index())
            .ok_or(GraphError::EndpointMissing { conn: conn.id })?;
        let dest = self
            .areas
            .get(conn.dest.index())
            .ok_or(GraphError::EndpointMissing { conn: conn.id })?;
        Ok((origin, dest))
    }

    /// `true` when exactly one endpoint is catchment-derived from the other
    /// — the case where locations were already paired by nearest-stop
    /// assignment and only index-aligned pairs should be resolved.
    pub fn is_index_aligned(&self, conn: &Connection) -> GraphResult<bool> {
        let (origin, dest) = self.endpoints(conn)?;
        let o_from_d = origin.is_catchment_of(dest.id);
        let d_from_o = dest.is_catchment_of(origin.id);
        Ok(o_from_d != d_from_o)
    }

    // ── Area construction ─────────────────────────────────────────────────

    /// Append a self-sampled area: `n` representative locations drawn from
    /// the disc of `radius_km` around `center`, excluding `zones`, tagged
    /// via `geocoder`.
    pub fn area_sampled(
        &mut self,
        name:      impl Into<String>,
        center:    GeoPoint,
        radius_km: f64,
        n:         usize,
        zones:     &[ExclusionZone],
        geocoder:  &dyn Geocoder,
        rng:       &mut SampleRng,
    ) -> GraphResult<AreaId> {
        let name = name.into();
        let sample = self.sampler.sample(center, radius_km, n, zones, geocoder, rng)?;
        debug!(
            "area {name}: sampled {} locations across {} municipalities",
            sample.locations.len(),
            sample.stats.municipality.len()
        );
        Ok(self.push_area(
            name,
            AreaKind::Sampled { center, radius_km, target: n },
            sample.locations,
        ))
    }

    /// Append an area with caller-supplied coordinates (tags unknown).
    pub fn area_fixed(&mut self, name: impl Into<String>, points: Vec<GeoPoint>) -> AreaId {
        let locations = points.into_iter().map(Location::untagged).collect();
        self.push_area(name.into(), AreaKind::Fixed, locations)
    }

    /// Append an area with fully formed locations.
    pub fn area_from_locations(
        &mut self,
        name:      impl Into<String>,
        locations: Vec<Location>,
    ) -> AreaId {
        self.push_area(name.into(), AreaKind::Fixed, locations)
    }

    fn push_area(&mut self, name: String, kind: AreaKind, locations: Vec<Location>) -> AreaId {
        let id = AreaId(self.areas.len() as u32);
        self.areas.push(Area { id, name, kind, locations });
        id
    }

    // ── Connection construction ───────────────────────────────────────────

    /// Append an unbound connection; endpoints are attached later via
    /// [`bind`][Self::bind] or transit composition.
    pub fn connection_unbound(&mut self, name: impl Into<String>, mode: LegMode) -> ConnId {
        let id = ConnId(self.connections.len() as u32);
        self.connections.push(Connection::new(id, name, mode));
        id
    }

    /// Append a connection bound to `origin` → `dest`.
    ///
    /// Dangling area ids are accepted here by design: the misconfiguration
    /// surfaces as [`GraphError::EndpointMissing`] when the connection is
    /// resolved or sampled, not at wiring time.
    pub fn connect(
        &mut self,
        name:   impl Into<String>,
        mode:   LegMode,
        origin: AreaId,
        dest:   AreaId,
    ) -> ConnId {
        let id = self.connection_unbound(name, mode);
        self.connections[id.index()].bind(origin, dest);
        id
    }

    pub fn connect_walk(&mut self, name: impl Into<String>, origin: AreaId, dest: AreaId) -> ConnId {
        self.connect(name, LegMode::Walk, origin, dest)
    }

    pub fn connect_bike(&mut self, name: impl Into<String>, origin: AreaId, dest: AreaId) -> ConnId {
        self.connect(name, LegMode::Bike, origin, dest)
    }

    pub fn connect_drive(&mut self, name: impl Into<String>, origin: AreaId, dest: AreaId) -> ConnId {
        self.connect(name, LegMode::Drive, origin, dest)
    }

    /// Bind (or rebind) an existing connection's endpoints.
    pub fn bind(&mut self, conn: ConnId, origin: AreaId, dest: AreaId) -> GraphResult<()> {
        self.connection_mut(conn)?.bind(origin, dest);
        Ok(())
    }

    // ── Transit composition ───────────────────────────────────────────────

    /// Compose a scheduled transit trip from `origin` to `dest` as three
    /// legs sharing two synthetic stop areas:
    ///
    /// 1. derive a departure-stop area from `origin` by nearest-stop
    ///    assignment over the (mode, line) stops;
    /// 2. derive an arrival-stop area from `dest` the same way;
    /// 3. bind `access`: origin → departure stop;
    /// 4. create the transit connection: departure stop → arrival stop,
    ///    tagged with mode, line, and the timing constraint;
    /// 5. bind `egress`: arrival stop → destination.
    ///
    /// Together with the two pre-created legs this leaves the graph exactly
    /// two areas and three connections larger.  Composition is atomic —
    /// every fallible lookup happens before the first append.  Returns the
    /// three connection ids in travel order.
    pub fn compose_transit(
        &mut self,
        name:   &str,
        origin: AreaId,
        access: ConnId,
        dest:   AreaId,
        egress: ConnId,
        mode:   TransitMode,
        line:   &str,
        timing: TripTiming,
    ) -> GraphResult<[ConnId; 3]> {
        // Fallible phase: look everything up before mutating.
        self.connection(access)?;
        self.connection(egress)?;
        let depart_locs = self.derive_stop_locations(origin, mode, line)?;
        let arrive_locs = self.derive_stop_locations(dest, mode, line)?;

        // Append phase: cannot fail.
        let depart_area = self.push_area(
            format!("{name}_{}_depart", mode.stop_label()),
            AreaKind::Catchment { of: origin, mode, line: line.to_string() },
            depart_locs,
        );
        let arrive_area = self.push_area(
            format!("{name}_{}_arrival", mode.stop_label()),
            AreaKind::Catchment { of: dest, mode, line: line.to_string() },
            arrive_locs,
        );

        let transit = self.connection_unbound(
            name.to_string(),
            LegMode::Transit { mode, line: line.to_string() },
        );
        {
            let conn = &mut self.connections[transit.index()];
            conn.bind(depart_area, arrive_area);
            conn.set_timing(timing);
        }

        self.connections[access.index()].bind(origin, depart_area);
        self.connections[egress.index()].bind(arrive_area, dest);

        info!(
            "composed {mode} trip {name:?}: {origin} → {depart_area} → {arrive_area} → {dest}"
        );
        Ok([access, transit, egress])
    }

    /// Convenience wrappers fixing the sub-mode.
    pub fn compose_bus(
        &mut self,
        name:   &str,
        origin: AreaId,
        access: ConnId,
        dest:   AreaId,
        egress: ConnId,
        line:   &str,
        timing: TripTiming,
    ) -> GraphResult<[ConnId; 3]> {
        self.compose_transit(name, origin, access, dest, egress, TransitMode::Bus, line, timing)
    }

    pub fn compose_metro(
        &mut self,
        name:   &str,
        origin: AreaId,
        access: ConnId,
        dest:   AreaId,
        egress: ConnId,
        line:   &str,
        timing: TripTiming,
    ) -> GraphResult<[ConnId; 3]> {
        self.compose_transit(name, origin, access, dest, egress, TransitMode::Subway, line, timing)
    }

    pub fn compose_train(
        &mut self,
        name:   &str,
        origin: AreaId,
        access: ConnId,
        dest:   AreaId,
        egress: ConnId,
        line:   &str,
        timing: TripTiming,
    ) -> GraphResult<[ConnId; 3]> {
        self.compose_transit(name, origin, access, dest, egress, TransitMode::Train, line, timing)
    }

    /// Nearest-stop locations for a catchment derivation, in the reference
    /// area's location order.  Stop locations inherit municipality/region
    /// from the reference area's first location and get a `"<mode>_stop"`
    /// place type.
    fn derive_stop_locations(
        &self,
        of:   AreaId,
        mode: TransitMode,
        line: &str,
    ) -> GraphResult<Vec<Location>> {
        let reference = self.area(of)?;
        let stops = self
            .stops
            .stops(mode, line)
            .ok_or_else(|| GraphError::UnknownLine { mode, line: line.to_string() })?;

        let inherited = reference
            .locations
            .first()
            .map(|l| l.tags.clone())
            .unwrap_or_default();
        let tags = PlaceTags::new(
            format!("{}_stop", mode.stop_label()),
            inherited.municipality,
            inherited.region,
        );

        Ok(nearest_stops(&reference.locations, stops)
            .into_iter()
            .map(|point| Location::new(point, tags.clone()))
            .collect())
    }
}
