//! Unit tests for mg-graph.
//!
//! All tests use hand-crafted fixed areas and a tiny stop registry so they
//! run without any sampling or geocoding.

#[cfg(test)]
mod helpers {
    use mg_core::{GeoPoint, TransitMode};

    use crate::{Graph, StopRegistry};

    /// Registry with one metro line ("M1") of three stops plus the "all"
    /// aggregate; stop latitudes 0.0, 1.0, 2.0 on lon 0.
    pub fn metro_registry() -> StopRegistry {
        let mut reg = StopRegistry::new();
        for lat in [0.0, 1.0, 2.0] {
            reg.add_stop(TransitMode::Subway, "M1", GeoPoint::new(lat, 0.0));
        }
        reg
    }

    /// Graph with two fixed areas: "inner" near lat 0, "outer" near lat 2.
    pub fn two_area_graph() -> (Graph, mg_core::AreaId, mg_core::AreaId) {
        let mut g = Graph::new("test", metro_registry());
        let inner = g.area_fixed(
            "inner",
            vec![GeoPoint::new(0.1, 0.2), GeoPoint::new(0.9, 0.1)],
        );
        let outer = g.area_fixed(
            "outer",
            vec![GeoPoint::new(2.1, 0.3), GeoPoint::new(1.1, 0.0)],
        );
        (g, inner, outer)
    }
}

#[cfg(test)]
mod registry {
    use mg_core::{GeoPoint, TransitMode};

    use crate::{StopRegistry, ALL_LINES};

    #[test]
    fn line_and_all_aggregate() {
        let mut reg = StopRegistry::new();
        reg.add_stop(TransitMode::Bus, "5C", GeoPoint::new(55.0, 12.0));
        reg.add_stop(TransitMode::Bus, "6A", GeoPoint::new(55.1, 12.1));

        assert_eq!(reg.stops(TransitMode::Bus, "5C").unwrap().len(), 1);
        assert_eq!(reg.stops(TransitMode::Bus, ALL_LINES).unwrap().len(), 2);
        assert!(reg.stops(TransitMode::Bus, "9A").is_none());
        assert!(reg.stops(TransitMode::Train, ALL_LINES).is_none());
    }
}

#[cfg(test)]
mod catchment {
    use mg_core::GeoPoint;
    use mg_sample::Location;

    use crate::nearest_stops;

    #[test]
    fn argmin_and_order_preserved() {
        let stops = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(2.0, 0.0),
        ];
        let reference: Vec<Location> = [
            GeoPoint::new(1.9, 0.4), // nearest: stop 2
            GeoPoint::new(0.2, 0.1), // nearest: stop 0
            GeoPoint::new(1.2, 0.0), // nearest: stop 1
        ]
        .into_iter()
        .map(Location::untagged)
        .collect();

        let assigned = nearest_stops(&reference, &stops);
        assert_eq!(assigned, vec![stops[2], stops[0], stops[1]]);

        // Brute-force argmin agreement on every index.
        for (i, loc) in reference.iter().enumerate() {
            let best = stops
                .iter()
                .min_by(|a, b| {
                    let da = (a.lat - loc.point.lat).powi(2) + (a.lon - loc.point.lon).powi(2);
                    let db = (b.lat - loc.point.lat).powi(2) + (b.lon - loc.point.lon).powi(2);
                    da.partial_cmp(&db).unwrap()
                })
                .unwrap();
            assert_eq!(assigned[i], *best, "index {i}");
        }
    }

    #[test]
    fn empty_stop_set_yields_empty() {
        let reference = vec![Location::untagged(GeoPoint::new(0.0, 0.0))];
        assert!(nearest_stops(&reference, &[]).is_empty());
    }
}

#[cfg(test)]
mod sampling {
    use mg_core::{GeoPoint, SampleRng};
    use mg_sample::{ExclusionZone, LocationSampler, NullGeocoder, SampleError};

    use super::helpers::metro_registry;
    use crate::{Graph, GraphError};

    #[test]
    fn sampler_override_caps_attempts() {
        // Lowered attempt cap plus a zone covering the whole disc: the
        // sampled-area constructor surfaces the exhaustion, and no area is
        // appended.
        let mut g = Graph::new("test", metro_registry())
            .with_sampler(LocationSampler::new(50));
        let everywhere =
            ExclusionZone::new([[10.0, -10.0], [10.0, 10.0], [-10.0, 10.0], [-10.0, -10.0]]);
        let mut rng = SampleRng::new(2);

        let err = g
            .area_sampled(
                "blocked",
                GeoPoint::new(55.7, 12.6),
                1.0,
                5,
                &[everywhere],
                &NullGeocoder,
                &mut rng,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            GraphError::Sampling(SampleError::Exhausted { attempts: 50, .. })
        ));
        assert!(g.areas().is_empty());
    }
}

#[cfg(test)]
mod connections {
    use mg_core::{AreaId, LegMode, TripTiming};

    use super::helpers::two_area_graph;
    use crate::GraphError;

    #[test]
    fn timing_is_set_once() {
        let (mut g, inner, outer) = two_area_graph();
        let id = g.connect("walk", LegMode::Walk, inner, outer);
        let conn = g.connection_mut(id).unwrap();

        conn.set_timing(TripTiming::DepartAt(100));
        conn.set_timing(TripTiming::ArriveBy(200)); // no-op
        assert_eq!(conn.timing(), Some(TripTiming::DepartAt(100)));
    }

    #[test]
    fn unbound_endpoint_is_reported() {
        let (mut g, inner, _) = two_area_graph();
        let id = g.connection_unbound("pending", LegMode::Bike);
        g.bind(id, inner, AreaId::INVALID).unwrap();

        let conn = g.connection(id).unwrap();
        assert!(!conn.is_bound());
        match g.endpoints(conn) {
            Err(GraphError::EndpointMissing { conn }) => assert_eq!(conn, id),
            other => panic!("expected EndpointMissing, got {other:?}"),
        }
    }

    #[test]
    fn dangling_endpoint_is_reported() {
        let (mut g, inner, _) = two_area_graph();
        let id = g.connect("dangling", LegMode::Drive, inner, AreaId(999));
        let conn = g.connection(id).unwrap();
        assert!(conn.is_bound()); // bound, but to a missing area
        assert!(matches!(
            g.endpoints(conn),
            Err(GraphError::EndpointMissing { .. })
        ));
    }

    #[test]
    fn bind_ignores_invalid() {
        let (mut g, inner, outer) = two_area_graph();
        let id = g.connect("walk", LegMode::Walk, inner, outer);
        g.bind(id, AreaId::INVALID, AreaId::INVALID).unwrap();
        let conn = g.connection(id).unwrap();
        assert_eq!((conn.origin, conn.dest), (inner, outer));
    }
}

#[cfg(test)]
mod composition {
    use mg_core::{LegMode, TransitMode, TripTiming};

    use super::helpers::two_area_graph;
    use crate::{AreaKind, GraphError};

    #[test]
    fn three_leg_shape() {
        let (mut g, inner, outer) = two_area_graph();
        let access = g.connection_unbound("commute_access", LegMode::Walk);
        let egress = g.connection_unbound("commute_egress", LegMode::Walk);

        let areas_before = g.areas().len();
        let conns_before = g.connections().len();

        let [a, t, e] = g
            .compose_metro(
                "commute",
                inner,
                access,
                outer,
                egress,
                "M1",
                TripTiming::DepartAt(1_743_500_000),
            )
            .unwrap();

        // Exactly 2 new areas; with the two pre-created legs, 3 connections
        // make up the trip.
        assert_eq!(g.areas().len(), areas_before + 2);
        assert_eq!(g.connections().len(), conns_before + 1);
        assert_eq!((a, e), (access, egress));

        let (access_c, transit_c, egress_c) = (
            g.connection(a).unwrap(),
            g.connection(t).unwrap(),
            g.connection(e).unwrap(),
        );
        // Chain continuity: O → depart → arrival → D.
        assert_eq!(access_c.origin, inner);
        assert_eq!(transit_c.origin, access_c.dest);
        assert_eq!(egress_c.origin, transit_c.dest);
        assert_eq!(egress_c.dest, outer);

        assert_eq!(
            transit_c.mode,
            LegMode::Transit { mode: TransitMode::Subway, line: "M1".into() }
        );
        assert_eq!(transit_c.timing(), Some(TripTiming::DepartAt(1_743_500_000)));

        // Stop areas are catchment-derived in reference order.
        let depart = g.area(access_c.dest).unwrap();
        assert!(depart.is_catchment_of(inner));
        assert_eq!(depart.locations.len(), g.area(inner).unwrap().locations.len());
        assert_eq!(depart.locations[0].tags.place_type, "metro_stop");
    }

    #[test]
    fn index_alignment_detection() {
        let (mut g, inner, outer) = two_area_graph();
        let access = g.connection_unbound("a", LegMode::Walk);
        let egress = g.connection_unbound("e", LegMode::Walk);
        let [a, t, e] = g
            .compose_metro("x", inner, access, outer, egress, "M1", TripTiming::ArriveBy(0))
            .unwrap();

        // Access and egress each pair a plain area with its own catchment
        // derivative → aligned.  The transit leg joins two catchment areas
        // derived from *different* references → full cross product.
        assert!(g.is_index_aligned(g.connection(a).unwrap()).unwrap());
        assert!(g.is_index_aligned(g.connection(e).unwrap()).unwrap());
        assert!(!g.is_index_aligned(g.connection(t).unwrap()).unwrap());

        // A plain pair of independent areas is also not aligned.
        let walk = g.connect_walk("walk", inner, outer);
        assert!(!g.is_index_aligned(g.connection(walk).unwrap()).unwrap());
    }

    #[test]
    fn unknown_line_aborts_cleanly() {
        let (mut g, inner, outer) = two_area_graph();
        let access = g.connection_unbound("a", LegMode::Walk);
        let egress = g.connection_unbound("e", LegMode::Walk);

        let areas_before = g.areas().len();
        let err = g
            .compose_metro("x", inner, access, outer, egress, "M9", TripTiming::DepartAt(0))
            .unwrap_err();
        assert!(matches!(err, GraphError::UnknownLine { .. }));
        // Atomic: nothing was appended, access/egress stay unbound.
        assert_eq!(g.areas().len(), areas_before);
        assert!(!g.connection(access).unwrap().is_bound());
    }

    #[test]
    fn catchment_invariant_nearest_per_index() {
        let (mut g, inner, outer) = two_area_graph();
        let access = g.connection_unbound("a", LegMode::Walk);
        let egress = g.connection_unbound("e", LegMode::Walk);
        let [a, _, _] = g
            .compose_metro("x", inner, access, outer, egress, "M1", TripTiming::DepartAt(0))
            .unwrap();

        let depart = g.area(g.connection(a).unwrap().dest).unwrap();
        let AreaKind::Catchment { of, .. } = &depart.kind else {
            panic!("expected catchment area");
        };
        let reference = g.area(*of).unwrap();
        // inner locations are (0.1, 0.2) and (0.9, 0.1): nearest M1 stops
        // are lat 0.0 and lat 1.0 respectively, in that order.
        assert_eq!(reference.id, inner);
        assert_eq!(depart.locations[0].point.lat, 0.0);
        assert_eq!(depart.locations[1].point.lat, 1.0);
    }
}
