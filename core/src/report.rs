// core/src/report.rs
use crate::converter::{elapsed_time, rating_from_speed, speed_from_rating};
use crate::error::{CalcError, CalcResult};
use crate::models::{RaceTime, RatingReport, RatingTable, SpeedReport};
use crate::multiplier::distance_multiplier;

/// Øvre grense for antall rader i en ratingtabell.
pub const MAX_TABLE_ROWS: usize = 10_000;

fn check_distance(distance_km: f64) -> CalcResult<f64> {
    if distance_km.is_finite() && distance_km >= 0.0 {
        Ok(distance_km)
    } else {
        log::warn!("rejected distance {distance_km}");
        Err(CalcError::InvalidDistance(distance_km))
    }
}

fn check_rating(rating: f64) -> CalcResult<f64> {
    if rating.is_finite() && rating >= 0.0 {
        Ok(rating)
    } else {
        log::warn!("rejected rating {rating}");
        Err(CalcError::InvalidRating(rating))
    }
}

fn check_time(time: &RaceTime) -> CalcResult<f64> {
    let valid = time.hours >= 0
        && time.minutes >= 0
        && time.seconds.is_finite()
        && time.seconds >= 0.0
        && time.as_hours() > 0.0;
    if valid {
        Ok(time.as_hours())
    } else {
        log::warn!("rejected time {time:?}");
        Err(CalcError::InvalidTime {
            hours: time.hours,
            minutes: time.minutes,
            seconds: time.seconds,
        })
    }
}

/// "Get Rating": snittfart og rating for en gjennomført distanse.
pub fn rate_performance(distance_km: f64, time: RaceTime) -> CalcResult<RatingReport> {
    let distance_km = check_distance(distance_km)?;
    let hours = check_time(&time)?;

    let speed_kmh = distance_km / hours;
    let report = RatingReport {
        distance_km,
        time,
        speed_kmh,
        multiplier: distance_multiplier(distance_km),
        rating: rating_from_speed(speed_kmh, distance_km),
    };
    log::debug!("rate_performance: {report:?}");
    Ok(report)
}

fn speed_report(rating: f64, distance_km: f64) -> SpeedReport {
    let speed_kmh = speed_from_rating(rating, distance_km);
    SpeedReport {
        rating,
        distance_km,
        multiplier: distance_multiplier(distance_km),
        speed_kmh,
        time: elapsed_time(distance_km, speed_kmh),
    }
}

/// "Get Speed/Time": fart og sluttid som trengs for ønsket rating.
pub fn plan_for_rating(distance_km: f64, rating: f64) -> CalcResult<SpeedReport> {
    let distance_km = check_distance(distance_km)?;
    let rating = check_rating(rating)?;

    let report = speed_report(rating, distance_km);
    log::debug!("plan_for_rating: {report:?}");
    Ok(report)
}

/// Antall rader i `start..=end` med gitt steg. Sluttverdien regnes med
/// selv om akkumulert avrunding havner en tøddel over.
fn row_count(start: f64, end: f64, step: f64) -> f64 {
    if end < start {
        0.0
    } else {
        ((end - start) / step + 1e-9).floor() + 1.0
    }
}

/// "Rating table": én fartsrapport per rating fra `start` til og med `end`.
///
/// Ratingene regnes som `start + k·step`, ikke ved å summere steg.
/// `start > end` gir tom tabell.
pub fn rating_table(distance_km: f64, start: f64, end: f64, step: f64) -> CalcResult<RatingTable> {
    let distance_km = check_distance(distance_km)?;
    if !start.is_finite() || !end.is_finite() {
        log::warn!("rejected rating range {start}..{end}");
        return Err(CalcError::InvalidRange { start, end });
    }
    check_rating(start)?;
    if !step.is_finite() || step <= 0.0 {
        log::warn!("rejected step {step}");
        return Err(CalcError::InvalidStep(step));
    }

    let rows = row_count(start, end, step);
    if rows > MAX_TABLE_ROWS as f64 {
        log::warn!("rejected rating table with {rows} rows (max {MAX_TABLE_ROWS})");
        return Err(CalcError::TableTooLarge {
            rows,
            max: MAX_TABLE_ROWS,
        });
    }

    let rows: Vec<SpeedReport> = (0..rows as usize)
        .map(|k| speed_report(start + k as f64 * step, distance_km))
        .collect();
    log::debug!(
        "rating_table: {} rows for {distance_km} km ({start}..={end} step {step})",
        rows.len()
    );

    Ok(RatingTable {
        distance_km,
        start,
        end,
        step,
        rows,
    })
}
