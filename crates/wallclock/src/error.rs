//! Error types for wallclock operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WallclockError {
    #[error("Invalid time expression: {0}")]
    InvalidExpression(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, WallclockError>;
