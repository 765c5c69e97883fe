//! Unit tests for bm-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, HasPoint, Point};

    #[test]
    fn euclidean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn componentwise_equality() {
        assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
    }

    #[test]
    fn geo_point_projects_lon_lat() {
        let g = GeoPoint::new(-122.26, 37.87);
        assert_eq!(g.point(), Point::new(-122.26, 37.87));
        assert_eq!(<&GeoPoint as HasPoint>::point(&&g), g.point());
    }

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(-122.2585, 37.8719);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(-122.0, 37.0);
        let b = GeoPoint::new(-122.0, 38.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn haversine_triangle_inequality() {
        let a = GeoPoint::new(-122.27, 37.87);
        let b = GeoPoint::new(-122.25, 37.86);
        let c = GeoPoint::new(-122.24, 37.88);
        assert!(a.distance_m(c) <= a.distance_m(b) + b.distance_m(c) + 1e-9);
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::Stopwatch;

    #[test]
    fn elapsed_is_monotonic() {
        let sw = Stopwatch::start();
        let first = sw.elapsed();
        let second = sw.elapsed();
        assert!(second >= first);
        assert!(sw.elapsed_secs() >= 0.0);
    }

    #[test]
    fn zero_budget_is_already_spent() {
        let sw = Stopwatch::start();
        assert!(!sw.within(Duration::ZERO));
        assert!(sw.within(Duration::from_secs(3600)));
    }
}

#[cfg(test)]
mod rng {
    use crate::SeededRng;

    #[test]
    fn same_seed_same_shuffle() {
        let mut a: Vec<u32> = (0..64).collect();
        let mut b = a.clone();
        SeededRng::new(7).shuffle(&mut a);
        SeededRng::new(7).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut v: Vec<u32> = (0..100).collect();
        SeededRng::new(1).shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SeededRng::new(99);
        for _ in 0..1000 {
            let x: f64 = rng.gen_range(-5.0..5.0);
            assert!((-5.0..5.0).contains(&x));
        }
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{BmError, RoutingConfig};

    #[test]
    fn default_is_valid() {
        let c = RoutingConfig::default();
        assert_eq!(c.timeout, Duration::from_secs(10));
        assert!(c.shuffle_seed.is_some());
    }

    #[test]
    fn from_secs_accepts_fractional() {
        let c = RoutingConfig::from_secs(0.5, None).unwrap();
        assert_eq!(c.timeout, Duration::from_millis(500));
        assert_eq!(c.shuffle_seed, None);
    }

    #[test]
    fn from_secs_rejects_negative_and_nan() {
        assert!(matches!(RoutingConfig::from_secs(-1.0, None), Err(BmError::Config(_))));
        assert!(matches!(RoutingConfig::from_secs(f64::NAN, None), Err(BmError::Config(_))));
    }

    #[test]
    fn with_timeout_overrides() {
        let c = RoutingConfig::default().with_timeout(Duration::ZERO);
        assert_eq!(c.timeout, Duration::ZERO);
    }
}
