// core/src/converter.rs
use std::fmt;

use serde::Serialize;

use crate::calibration::{base_rating_for_speed, speed_for_base_rating};
use crate::multiplier::distance_multiplier;

/// Rating for en snittfart (km/t) over en distanse (km).
///
/// Multiplier ganges med hele basisratingen, også over cutoff.
/// Fart ≤ 0 gir 0.
pub fn rating_from_speed(speed_kmh: f64, distance_km: f64) -> f64 {
    if speed_kmh <= 0.0 {
        return 0.0;
    }
    base_rating_for_speed(speed_kmh) * distance_multiplier(distance_km)
}

/// Snittfart (km/t) som gir `rating` over distansen. Eksakt invers av
/// [`rating_from_speed`] opp til flyttallsavrunding.
///
/// Rating ≤ 0 gir 0. Multiplier er alltid i [0.8, 1.4], så divisjonen er trygg.
pub fn speed_from_rating(rating: f64, distance_km: f64) -> f64 {
    if rating <= 0.0 {
        return 0.0;
    }
    let adjusted = rating / distance_multiplier(distance_km);
    speed_for_base_rating(adjusted)
}

/// Sluttid splittet i timer/minutter/sekunder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElapsedTime {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl ElapsedTime {
    pub fn from_total_seconds(total: i64) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours {} minutes {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Avrunding av sekunder: halvveis bort fra null (0.5 → 1, 2.5 → 3).
pub fn round_seconds(seconds: f64) -> i64 {
    seconds.round() as i64
}

/// Tid brukt på `distance_km` i `speed_kmh`.
///
/// Fart == 0 gir (0, 0, 0) i stedet for divisjon med null.
pub fn elapsed_time(distance_km: f64, speed_kmh: f64) -> ElapsedTime {
    if speed_kmh == 0.0 {
        return ElapsedTime::default();
    }
    ElapsedTime::from_total_seconds(round_seconds(distance_km / speed_kmh * 3600.0))
}
