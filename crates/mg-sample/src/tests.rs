//! Unit tests for mg-sample.

#[cfg(test)]
mod zone {
    use crate::ExclusionZone;

    /// Axis-aligned unit square centered on the origin — the case where the
    /// bound test is exact.
    fn unit_square() -> ExclusionZone {
        // v0 bottom-right, v1 top-right, v2 top-left, v3 bottom-left:
        // v0→v1 right edge, v1→v2 upper, v2→v3 left, v3→v0 lower.
        ExclusionZone::new([[0.5, -0.5], [0.5, 0.5], [-0.5, 0.5], [-0.5, -0.5]])
    }

    #[test]
    fn rectangle_inside_outside() {
        let z = unit_square();
        assert!(z.contains(0.0, 0.0));
        assert!(z.contains(0.49, -0.49));
        assert!(!z.contains(0.6, 0.0));
        assert!(!z.contains(0.0, -0.7));
        assert!(!z.contains(2.0, 2.0));
    }

    #[test]
    fn boundary_is_inside() {
        let z = unit_square();
        assert!(z.contains(0.5, 0.0));
        assert!(z.contains(0.0, 0.5));
    }

    #[test]
    fn from_flat_matches_vertices() {
        let z = ExclusionZone::from_flat([0.5, -0.5, 0.5, 0.5, -0.5, 0.5, -0.5, -0.5]);
        assert_eq!(z, unit_square());
    }

    #[test]
    fn skewed_quad_center_still_rejected() {
        // A parallelogram leaning right.  The bound test is approximate on
        // the slanted corners but must still reject the interior bulk.
        let z = ExclusionZone::new([[0.6, -0.5], [0.9, 0.5], [-0.1, 0.5], [-0.4, -0.5]]);
        assert!(z.contains(0.25, 0.0));
        assert!(!z.contains(5.0, 0.0));
    }
}

#[cfg(test)]
mod sampler {
    use mg_core::{GeoPoint, SampleRng};

    use crate::{ExclusionZone, LocationSampler, NullGeocoder, SampleError};

    #[test]
    fn exact_count_and_radius_bound() {
        let sampler = LocationSampler::default();
        let mut rng = SampleRng::new(42);
        let pts = sampler.sample_disc(1.5, 200, &[], &mut rng).unwrap();
        assert_eq!(pts.len(), 200);
        for p in &pts {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!(r <= 1.5 + 1e-12, "point at r={r} outside disc");
            assert!((r - p.radius_km).abs() < 1e-12);
        }
    }

    #[test]
    fn zones_are_excluded() {
        let zone = ExclusionZone::new([[0.4, -0.4], [0.4, 0.4], [-0.4, 0.4], [-0.4, -0.4]]);
        let sampler = LocationSampler::default();
        let mut rng = SampleRng::new(7);
        let pts = sampler.sample_disc(1.0, 500, &[zone], &mut rng).unwrap();
        assert_eq!(pts.len(), 500);
        for p in &pts {
            assert!(!zone.contains(p.x, p.y), "({}, {}) inside zone", p.x, p.y);
        }
    }

    #[test]
    fn impossible_zone_exhausts() {
        // Zone covering the whole disc and then some.
        let zone = ExclusionZone::new([[10.0, -10.0], [10.0, 10.0], [-10.0, 10.0], [-10.0, -10.0]]);
        let sampler = LocationSampler::new(200);
        let mut rng = SampleRng::new(1);
        match sampler.sample_disc(1.0, 5, &[zone], &mut rng) {
            Err(SampleError::Exhausted { attempts, accepted, requested }) => {
                assert_eq!(attempts, 200);
                assert_eq!(accepted, 0);
                assert_eq!(requested, 5);
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
    }

    #[test]
    fn cap_counts_only_rejected_draws() {
        // Requesting far more points than the cap must still succeed when
        // nothing is rejected.
        let sampler = LocationSampler::new(10);
        let mut rng = SampleRng::new(8);
        let pts = sampler.sample_disc(1.0, 50, &[], &mut rng).unwrap();
        assert_eq!(pts.len(), 50);
    }

    #[test]
    fn zero_count_is_empty() {
        let sampler = LocationSampler::default();
        let mut rng = SampleRng::new(3);
        assert!(sampler.sample_disc(1.0, 0, &[], &mut rng).unwrap().is_empty());
    }

    #[test]
    fn geographic_sample_within_radius() {
        let center = GeoPoint::new(55.709932, 12.599082);
        let sampler = LocationSampler::default();
        let mut rng = SampleRng::new(11);
        let sample = sampler
            .sample(center, 0.75, 30, &[], &NullGeocoder, &mut rng)
            .unwrap();
        assert_eq!(sample.locations.len(), 30);
        for loc in &sample.locations {
            let d = center.distance_km(loc.point);
            assert!(d <= 0.75 + 1e-9, "location {d} km from center");
        }
        // NullGeocoder → every tag counted under "unknown".
        assert_eq!(sample.stats.total(), 30);
        assert_eq!(sample.stats.municipality.get("unknown"), Some(&30));
    }
}

#[cfg(test)]
mod density {
    use mg_core::SampleRng;

    use crate::LocationSampler;

    /// Area-uniform sampling puts half the mass inside r = R/√2.  A binned
    /// check over many seeded draws: the inner-disc fraction must sit near
    /// 0.5, and the naive uniform-in-radius value (≈ 0.707) must be far off.
    #[test]
    fn half_mass_inside_r_over_sqrt2() {
        let sampler = LocationSampler::new(100_000);
        let mut rng = SampleRng::new(1234);
        let pts = sampler.sample_disc(1.0, 20_000, &[], &mut rng).unwrap();

        let inner = pts
            .iter()
            .filter(|p| p.radius_km < 1.0 / std::f64::consts::SQRT_2)
            .count() as f64
            / pts.len() as f64;

        assert!((inner - 0.5).abs() < 0.02, "inner fraction {inner}");
    }

    /// Finer binning: ten equal-area annuli must each hold ~10 % of points.
    #[test]
    fn equal_area_annuli_are_balanced() {
        let sampler = LocationSampler::new(200_000);
        let mut rng = SampleRng::new(99);
        let pts = sampler.sample_disc(1.0, 50_000, &[], &mut rng).unwrap();

        let mut bins = [0usize; 10];
        for p in &pts {
            // Annulus k spans r in [√(k/10), √((k+1)/10)): equal areas.
            let k = ((p.radius_km * p.radius_km) * 10.0).floor() as usize;
            bins[k.min(9)] += 1;
        }
        for (k, &count) in bins.iter().enumerate() {
            let frac = count as f64 / pts.len() as f64;
            assert!((frac - 0.1).abs() < 0.01, "annulus {k} holds {frac}");
        }
    }
}

#[cfg(test)]
mod geocode {
    use mg_core::GeoPoint;

    use crate::{GeocodeError, Geocoder, LocationSampler, PlaceTags};
    use mg_core::SampleRng;

    /// Geocoder that always fails, to prove failures are non-fatal.
    struct DownGeocoder;

    impl Geocoder for DownGeocoder {
        fn reverse(&self, _point: GeoPoint) -> Result<PlaceTags, GeocodeError> {
            Err(GeocodeError::Unavailable("connection refused".into()))
        }
    }

    #[test]
    fn geocoder_failure_degrades_to_unknown() {
        let center = GeoPoint::new(55.7, 12.6);
        let sampler = LocationSampler::default();
        let mut rng = SampleRng::new(5);
        let sample = sampler
            .sample(center, 0.5, 10, &[], &DownGeocoder, &mut rng)
            .unwrap();
        assert_eq!(sample.locations.len(), 10);
        for loc in &sample.locations {
            assert_eq!(loc.tags, PlaceTags::unknown());
        }
    }
}
