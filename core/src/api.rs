// core/src/api.rs
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use serde_path_to_error as spte;

use crate::models::RaceTime;
use crate::report::{plan_for_rating, rate_performance, rating_table};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatingRequest {
    #[serde(alias = "distance")]
    pub distance_km: f64,
    pub time: RaceTime,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeedRequest {
    #[serde(alias = "distance")]
    pub distance_km: f64,
    pub rating: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableRequest {
    #[serde(alias = "distance")]
    pub distance_km: f64,
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

/// JSON-forespørsel; `mode` velger variant.
#[derive(Debug, Clone)]
pub enum CalcRequest {
    Rating(RatingRequest),
    Speed(SpeedRequest),
    Table(TableRequest),
}

// Parse med sti til feltet som feilet (f.eks. `time.hours`)
fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    spte::deserialize(value).map_err(|e| format!("parse error at {}: {}", e.path(), e.inner()))
}

pub fn parse_request(json_in: &str) -> Result<CalcRequest, String> {
    let mut value: Value =
        serde_json::from_str(json_in).map_err(|e| format!("parse error: {e}"))?;

    let mode = value
        .as_object_mut()
        .ok_or_else(|| "parse error: request must be a JSON object".to_string())?
        .remove("mode")
        .ok_or_else(|| "parse error: missing field `mode`".to_string())?;

    match mode.as_str() {
        Some("rating") => from_value(value).map(CalcRequest::Rating),
        Some("speed") => from_value(value).map(CalcRequest::Speed),
        Some("table") => from_value(value).map(CalcRequest::Table),
        _ => Err(format!(
            "parse error at mode: expected one of \"rating\", \"speed\", \"table\", got {mode}"
        )),
    }
}

/// Kjør en forespørsel og returner rapporten som JSON.
pub fn execute(request: &CalcRequest) -> Result<String, String> {
    let out = match request {
        CalcRequest::Rating(r) => {
            let report = rate_performance(r.distance_km, r.time).map_err(|e| e.to_string())?;
            serde_json::to_string(&report)
        }
        CalcRequest::Speed(r) => {
            let report = plan_for_rating(r.distance_km, r.rating).map_err(|e| e.to_string())?;
            serde_json::to_string(&report)
        }
        CalcRequest::Table(r) => {
            let table =
                rating_table(r.distance_km, r.start, r.end, r.step).map_err(|e| e.to_string())?;
            serde_json::to_string(&table)
        }
    };
    out.map_err(|e| format!("serialize error: {e}"))
}

/// Én JSON inn, én JSON ut. Brukes av Python-bindingen og `--json`-modus.
pub fn handle_request_json(json_in: &str) -> Result<String, String> {
    let request = parse_request(json_in)?;
    log::debug!("json request: {request:?}");
    execute(&request)
}
