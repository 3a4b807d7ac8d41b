use serde::{Deserialize, Serialize};

use crate::converter::ElapsedTime;

/// Løpt tid slik brukeren skriver den inn (timer, minutter, sekunder).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RaceTime {
    #[serde(default)]
    pub hours: i64,
    #[serde(default)]
    pub minutes: i64,
    #[serde(default)]
    pub seconds: f64,
}

impl RaceTime {
    pub fn new(hours: i64, minutes: i64, seconds: f64) -> Self {
        Self { hours, minutes, seconds }
    }

    pub fn as_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }
}

/// Resultat for "Get Rating": fart og rating fra distanse + tid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingReport {
    pub distance_km: f64,
    pub time: RaceTime,
    pub speed_kmh: f64,
    pub multiplier: f64,
    pub rating: f64,
}

/// Resultat for "Get Speed/Time": fart og sluttid for ønsket rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedReport {
    pub rating: f64,
    pub distance_km: f64,
    pub multiplier: f64,
    pub speed_kmh: f64,
    pub time: ElapsedTime,
}

/// En rad i ratingtabellen har samme innhold som en enkelt fartsrapport.
pub type TableRow = SpeedReport;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingTable {
    pub distance_km: f64,
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub rows: Vec<TableRow>,
}
