// core/src/multiplier.rs

/// Laveste multiplier (korte distanser).
pub const MULTIPLIER_MIN: f64 = 0.8;
/// Høyeste multiplier (ultra, ≥ 100 km).
pub const MULTIPLIER_MAX: f64 = 1.4;

/// Hvordan et segment regner ut multiplier innenfor sitt intervall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ramp {
    Flat(f64),
    /// Lineær fra `from` ved `from_km` til `to` ved `to_km`.
    Linear { from_km: f64, to_km: f64, from: f64, to: f64 },
}

impl Ramp {
    pub fn value_at(&self, distance_km: f64) -> f64 {
        match *self {
            Ramp::Flat(v) => v,
            Ramp::Linear { from_km, to_km, from, to } => {
                from + (distance_km - from_km) * (to - from) / (to_km - from_km)
            }
        }
    }
}

/// Ett distanseintervall. Nedre grense er forrige segments øvre grense;
/// `closed` sier om øvre grense selv hører til segmentet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSegment {
    pub upper_km: f64,
    pub closed: bool,
    pub ramp: Ramp,
}

impl DistanceSegment {
    const fn new(upper_km: f64, closed: bool, ramp: Ramp) -> Self {
        Self { upper_km, closed, ramp }
    }

    pub fn contains_upper(&self, distance_km: f64) -> bool {
        if self.closed {
            distance_km <= self.upper_km
        } else {
            distance_km < self.upper_km
        }
    }
}

const fn linear(from_km: f64, to_km: f64, from: f64, to: f64) -> Ramp {
    Ramp::Linear { from_km, to_km, from, to }
}

/// Stigende, sammenhengende segmenter som dekker [0, ∞).
/// Verdien i høyre kant av et segment er lik verdien i venstre kant av neste.
pub const DISTANCE_SEGMENTS: [DistanceSegment; 9] = [
    DistanceSegment::new(0.1, false, Ramp::Flat(MULTIPLIER_MIN)),
    DistanceSegment::new(1.0, false, linear(0.1, 1.0, 0.8, 0.9)),
    DistanceSegment::new(5.0, true, linear(1.0, 5.0, 0.9, 1.0)),
    DistanceSegment::new(10.0, true, linear(5.0, 10.0, 1.0, 1.1)),
    DistanceSegment::new(15.0, true, linear(10.0, 15.0, 1.1, 1.15)),
    DistanceSegment::new(21.1, true, linear(15.0, 21.1, 1.15, 1.2)),
    DistanceSegment::new(42.3, true, linear(21.1, 42.3, 1.2, 1.3)),
    DistanceSegment::new(100.0, false, linear(42.3, 100.0, 1.3, 1.4)),
    DistanceSegment::new(f64::INFINITY, true, Ramp::Flat(MULTIPLIER_MAX)),
];

/// Distansemultiplier for `distance_km`.
///
/// Første segment (i stigende rekkefølge) som inneholder distansen vinner, så
/// delte grenser går til segmentet til venstre. Negativ distanse valideres ikke
/// og havner i første segment; NaN treffer ingen grense og gir taket (1.4).
pub fn distance_multiplier(distance_km: f64) -> f64 {
    DISTANCE_SEGMENTS
        .iter()
        .find(|seg| seg.contains_upper(distance_km))
        .map(|seg| seg.ramp.value_at(distance_km))
        .unwrap_or(MULTIPLIER_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_boundary_goes_to_left_segment() {
        // 5.0 er lukket i [1, 5] og skal ikke evalueres i (5, 10]
        let idx = DISTANCE_SEGMENTS
            .iter()
            .position(|s| s.contains_upper(5.0))
            .unwrap();
        assert_eq!(idx, 2);

        // 1.0 er åpen øvre grense i [0.1, 1) → hører til [1, 5]
        let idx = DISTANCE_SEGMENTS
            .iter()
            .position(|s| s.contains_upper(1.0))
            .unwrap();
        assert_eq!(idx, 2);
    }

    #[test]
    fn nan_falls_through_to_ceiling() {
        assert_eq!(distance_multiplier(f64::NAN), MULTIPLIER_MAX);
    }

    #[test]
    fn last_segment_is_unbounded() {
        assert!(DISTANCE_SEGMENTS.last().unwrap().upper_km.is_infinite());
        assert_eq!(distance_multiplier(1.0e9), MULTIPLIER_MAX);
    }
}
