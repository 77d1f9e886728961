//! Error types

use chrono::NaiveDate;
use thiserror::Error;

/// Validation errors for HR records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("leave ends on {end} before it starts on {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("check-out at {check_out} precedes check-in at {check_in}")]
    CheckOutBeforeCheckIn {
        check_in: chrono::NaiveTime,
        check_out: chrono::NaiveTime,
    },
}
