use runrating_core::converter::round_seconds;
use runrating_core::{distance_multiplier, elapsed_time, rating_from_speed, speed_from_rating, ElapsedTime};

const DISTANCES: [f64; 12] = [0.0, 0.05, 0.4, 1.0, 3.0, 5.0, 7.5, 10.0, 21.1, 42.195, 80.0, 160.0];

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * b.abs().max(1.0)
}

#[test]
fn test_degenerate_inputs_give_zero() {
    for d in DISTANCES {
        assert_eq!(rating_from_speed(0.0, d), 0.0);
        assert_eq!(rating_from_speed(-3.0, d), 0.0);
        assert_eq!(speed_from_rating(0.0, d), 0.0);
        assert_eq!(speed_from_rating(-100.0, d), 0.0);
        assert_eq!(elapsed_time(d, 0.0), ElapsedTime::default());
    }
}

#[test]
fn test_rating_for_12kmh_over_10km() {
    // base = 1500 + (12-11)·500/4 = 1625, multiplier(10) = 1.1
    let r = rating_from_speed(12.0, 10.0);
    assert!((r - 1787.5).abs() < 1e-6, "got {r}");
}

#[test]
fn test_multiplier_scales_extrapolated_rating() {
    // Over cutoff: (2000 + 5·100) · 1.2 ved 21.1 km
    let r = rating_from_speed(20.0, 21.1);
    assert!((r - 3000.0).abs() < 1e-6, "got {r}");
}

#[test]
fn test_roundtrip_speed_to_rating_to_speed() {
    for d in DISTANCES {
        for i in 1..=300 {
            let s = i as f64 * 0.1; // 0.1–30 km/t, over og under cutoff
            let back = speed_from_rating(rating_from_speed(s, d), d);
            assert!(rel_close(back, s, 1e-6), "d={d} s={s} back={back}");
        }
    }
}

#[test]
fn test_roundtrip_rating_to_speed_to_rating() {
    for d in DISTANCES {
        for i in 1..=400 {
            let r = i as f64 * 10.0; // 10–4000
            let back = rating_from_speed(speed_from_rating(r, d), d);
            assert!(rel_close(back, r, 1e-6), "d={d} r={r} back={back}");
        }
    }
}

#[test]
fn test_rating_strictly_increasing_in_speed() {
    for d in DISTANCES {
        let mut prev = rating_from_speed(0.05, d);
        for i in 2..=600 {
            let s = i as f64 * 0.05;
            let r = rating_from_speed(s, d);
            assert!(r > prev, "not increasing at d={d}, s={s}: {prev} -> {r}");
            prev = r;
        }
    }
}

#[test]
fn test_speed_from_rating_uses_multiplier() {
    // Samme rating krever høyere fart på kort distanse (lav multiplier)
    let short = speed_from_rating(1500.0, 1.0);
    let long = speed_from_rating(1500.0, 42.195);
    assert!(short > long);
    assert!((rating_from_speed(short, 1.0) - 1500.0).abs() < 1e-6);
    assert!(distance_multiplier(1.0) < distance_multiplier(42.195));
}

#[test]
fn test_elapsed_time_half_marathon() {
    // 21.1 km / 10 km/t = 7596 s
    let t = elapsed_time(21.1, 10.0);
    assert_eq!(t, ElapsedTime { hours: 2, minutes: 6, seconds: 36 });
}

#[test]
fn test_elapsed_time_rounds_to_nearest_second() {
    // 5 km / (23/3 km/t) = 2347.83 s → 2348
    let t = elapsed_time(5.0, 7.666666666666666);
    assert_eq!(t, ElapsedTime { hours: 0, minutes: 39, seconds: 8 });
}

#[test]
fn test_round_seconds_half_away_from_zero() {
    assert_eq!(round_seconds(0.5), 1);
    assert_eq!(round_seconds(1.5), 2);
    assert_eq!(round_seconds(2.5), 3);
    assert_eq!(round_seconds(2.4999), 2);
    assert_eq!(round_seconds(-0.5), -1);
}
