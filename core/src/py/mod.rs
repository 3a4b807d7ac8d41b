// core/src/py/mod.rs
//
// Python-modul `runrating_core`. Bygges kun med `--features python`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::api::handle_request_json;
use crate::converter;
use crate::multiplier;

#[pyfunction]
fn rating_from_speed(speed_kmh: f64, distance_km: f64) -> f64 {
    converter::rating_from_speed(speed_kmh, distance_km)
}

#[pyfunction]
fn speed_from_rating(rating: f64, distance_km: f64) -> f64 {
    converter::speed_from_rating(rating, distance_km)
}

/// (timer, minutter, sekunder)
#[pyfunction]
fn elapsed_time(distance_km: f64, speed_kmh: f64) -> (i64, i64, i64) {
    let t = converter::elapsed_time(distance_km, speed_kmh);
    (t.hours, t.minutes, t.seconds)
}

#[pyfunction]
fn distance_multiplier(distance_km: f64) -> f64 {
    multiplier::distance_multiplier(distance_km)
}

/// JSON inn → JSON ut. Parse- og valideringsfeil blir `ValueError`.
#[pyfunction]
fn calculate_json(json_in: &str) -> PyResult<String> {
    handle_request_json(json_in).map_err(PyValueError::new_err)
}

#[pymodule]
fn runrating_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rating_from_speed, m)?)?;
    m.add_function(wrap_pyfunction!(speed_from_rating, m)?)?;
    m.add_function(wrap_pyfunction!(elapsed_time, m)?)?;
    m.add_function(wrap_pyfunction!(distance_multiplier, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_json, m)?)?;
    Ok(())
}
