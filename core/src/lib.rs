pub mod api;
pub mod calibration;
pub mod cli;
pub mod converter;
pub mod error;
pub mod models;
pub mod multiplier;
pub mod report;

#[cfg(feature = "python")]
mod py;

pub use api::handle_request_json;
pub use calibration::{CalibrationPoint, CALIBRATION_POINTS};
pub use converter::{elapsed_time, rating_from_speed, speed_from_rating, ElapsedTime};
pub use error::{CalcError, CalcResult};
pub use models::{RaceTime, RatingReport, RatingTable, SpeedReport, TableRow};
pub use multiplier::{distance_multiplier, DistanceSegment, DISTANCE_SEGMENTS};
pub use report::{plan_for_rating, rate_performance, rating_table};
