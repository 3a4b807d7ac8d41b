use runrating_core::multiplier::{Ramp, MULTIPLIER_MAX, MULTIPLIER_MIN};
use runrating_core::{distance_multiplier, DISTANCE_SEGMENTS};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_multiplier_known_distances() {
    assert!(close(distance_multiplier(0.0), 0.8));
    assert!(close(distance_multiplier(0.05), 0.8));
    assert!(close(distance_multiplier(0.55), 0.85));
    assert!(close(distance_multiplier(1.0), 0.9));
    assert!(close(distance_multiplier(5.0), 1.0));
    assert!(close(distance_multiplier(10.0), 1.1));
    assert!(close(distance_multiplier(15.0), 1.15));
    assert!(close(distance_multiplier(21.1), 1.2));
    assert!(close(distance_multiplier(42.3), 1.3));
    assert!(close(distance_multiplier(100.0), 1.4));
    assert!(close(distance_multiplier(250.0), 1.4));
}

#[test]
fn test_multiplier_stays_in_range() {
    // 0–150 km i steg på 10 m
    for i in 0..=15_000 {
        let d = i as f64 * 0.01;
        let m = distance_multiplier(d);
        assert!(
            (MULTIPLIER_MIN..=MULTIPLIER_MAX + 1e-12).contains(&m),
            "multiplier({d}) = {m} out of range"
        );
    }
}

#[test]
fn test_multiplier_non_decreasing() {
    let mut prev = distance_multiplier(0.0);
    for i in 1..=15_000 {
        let d = i as f64 * 0.01;
        let m = distance_multiplier(d);
        assert!(m >= prev - 1e-12, "multiplier dropped at {d}: {prev} -> {m}");
        prev = m;
    }
}

#[test]
fn test_segments_continuous_at_boundaries() {
    for pair in DISTANCE_SEGMENTS.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        let at = left.upper_km;
        let l = left.ramp.value_at(at);
        let r = right.ramp.value_at(at);
        assert!(
            (l - r).abs() < 1e-9,
            "discontinuity at {at} km: left={l}, right={r}"
        );
    }
}

#[test]
fn test_segments_ascending_and_linear_ramps_anchored() {
    for pair in DISTANCE_SEGMENTS.windows(2) {
        assert!(pair[1].upper_km > pair[0].upper_km);
    }
    // Lineære segmenter skal slutte der intervallet slutter
    for seg in DISTANCE_SEGMENTS.iter() {
        if let Ramp::Linear { to_km, .. } = seg.ramp {
            assert_eq!(to_km, seg.upper_km);
        }
    }
}
