// core/src/error.rs
use thiserror::Error;

/// Avviste inndata. Selve konverteringene feiler aldri; disse kommer fra
/// valideringen i `report`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("distance must be a non-negative number of km, got {0}")]
    InvalidDistance(f64),

    #[error("time must be positive with non-negative components, got {hours}h {minutes}m {seconds}s")]
    InvalidTime { hours: i64, minutes: i64, seconds: f64 },

    #[error("rating must be a non-negative number, got {0}")]
    InvalidRating(f64),

    #[error("rating range must be finite, got {start}..{end}")]
    InvalidRange { start: f64, end: f64 },

    #[error("step must be a positive number, got {0}")]
    InvalidStep(f64),

    #[error("rating table would have {rows} rows (max {max})")]
    TableTooLarge { rows: f64, max: usize },
}

pub type CalcResult<T> = Result<T, CalcError>;
