//! Internal domain models.
//!
//! These types carry the decision logic of the pipeline and are deliberately
//! isolated from the Python-facing DTOs in [`crate::api`]. Conversions happen
//! at the API boundary only.

pub mod alert;
pub mod geo;
pub mod raster;
pub mod request;
pub mod time;

pub use alert::*;
pub use geo::*;
pub use raster::*;
pub use request::*;
pub use time::*;

use chrono::NaiveDate;

/// Error type for user-input validation.
///
/// Validation failures are recoverable: the shell shows the message, blocks
/// the action and lets the user correct the input. They must never reach the
/// imagery providers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("start date {start} must not be after end date {end}")]
    DateRangeInverted { start: NaiveDate, end: NaiveDate },

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    MalformedDate(String),
}

/// Result type for user-input validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
