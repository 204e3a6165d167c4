//! Error types for time-window resolution.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Unsupported time range label: {0}")]
    UnsupportedLabel(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid day boundary policy: {0}")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, WindowError>;
