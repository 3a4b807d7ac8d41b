// core/src/calibration.rs

/// Ankerpunkt i fart→rating-kurven (uten distansemultiplier).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    pub speed_kmh: f64,
    pub rating: f64,
}

impl CalibrationPoint {
    const fn new(speed_kmh: f64, rating: f64) -> Self {
        Self { speed_kmh, rating }
    }
}

/// Strengt stigende i begge felt. Siste punkt er cutoff.
pub const CALIBRATION_POINTS: [CalibrationPoint; 4] = [
    CalibrationPoint::new(0.0, 0.0),
    CalibrationPoint::new(5.0, 600.0),
    CalibrationPoint::new(11.0, 1500.0),
    CalibrationPoint::new(15.0, 2000.0),
];

pub const CUTOFF_SPEED_KMH: f64 = 15.0;
pub const TOP_RATING: f64 = 2000.0;
/// Rating per km/t over cutoff.
pub const SLOPE_ABOVE_CUTOFF: f64 = 100.0;

/// Basisrating for en fart, før distansemultiplier.
///
/// Over cutoff ekstrapoleres lineært. Ellers interpoleres det mellom første
/// par av nabopunkter som omslutter farten. Fart utenfor tabellen (negativ,
/// NaN) gir 0.
pub fn base_rating_for_speed(speed_kmh: f64) -> f64 {
    if speed_kmh > CUTOFF_SPEED_KMH {
        return TOP_RATING + (speed_kmh - CUTOFF_SPEED_KMH) * SLOPE_ABOVE_CUTOFF;
    }

    for pair in CALIBRATION_POINTS.windows(2) {
        let (low, high) = (pair[0], pair[1]);
        if speed_kmh >= low.speed_kmh && speed_kmh <= high.speed_kmh {
            log::trace!(
                "speed {speed_kmh} in bracket [{}, {}] km/h",
                low.speed_kmh,
                high.speed_kmh
            );
            return low.rating
                + (speed_kmh - low.speed_kmh) * (high.rating - low.rating)
                    / (high.speed_kmh - low.speed_kmh);
        }
    }
    0.0
}

/// Invers av [`base_rating_for_speed`]: fart for en basisrating.
pub fn speed_for_base_rating(base_rating: f64) -> f64 {
    if base_rating > TOP_RATING {
        return CUTOFF_SPEED_KMH + (base_rating - TOP_RATING) / SLOPE_ABOVE_CUTOFF;
    }

    for pair in CALIBRATION_POINTS.windows(2) {
        let (low, high) = (pair[0], pair[1]);
        if base_rating >= low.rating && base_rating <= high.rating {
            log::trace!(
                "rating {base_rating} in bracket [{}, {}]",
                low.rating,
                high.rating
            );
            return low.speed_kmh
                + (base_rating - low.rating) * (high.speed_kmh - low.speed_kmh)
                    / (high.rating - low.rating);
        }
    }
    0.0
}
