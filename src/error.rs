//! Unified error hierarchy for trainlog
//!
//! Provides structured error types for package dispatch and metric
//! calculation, with integration into the tracing system.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level error type for all trainlog operations
#[derive(Debug, Error)]
pub enum TrainlogError {
    /// Sensor package dispatch errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Metric calculation errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while resolving a sensor package to a workout
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Activity code is not one of the three known codes
    #[error("unknown workout type {code:?} (valid codes are SWM, RUN, WLK)")]
    UnknownWorkoutType { code: String },

    /// Package carries the wrong number of values for its code
    #[error("wrong field count for {code}: expected {expected}, got {actual}")]
    WrongFieldCount {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A positional value cannot be interpreted as the field it maps to
    #[error("invalid value for {field} in {code} package: {value}")]
    InvalidField {
        code: &'static str,
        field: &'static str,
        value: Decimal,
    },
}

/// Errors raised while validating workout measurements
#[derive(Debug, Error)]
pub enum CalculationError {
    /// Parameter must be strictly positive (it is divided by)
    #[error("{parameter} must be positive for {activity}, got {value}")]
    NonPositiveParameter {
        activity: &'static str,
        parameter: &'static str,
        value: Decimal,
    },
}

/// Result type alias for trainlog operations
pub type Result<T> = std::result::Result<T, TrainlogError>;

impl TrainlogError {
    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TrainlogError::Dispatch(DispatchError::UnknownWorkoutType { code }) => {
                format!(
                    "Unknown workout type {:?}. Valid codes are SWM, RUN and WLK.",
                    code
                )
            }
            TrainlogError::Dispatch(DispatchError::WrongFieldCount {
                code,
                expected,
                actual,
            }) => {
                format!(
                    "A {} package needs {} sensor values, but {} were supplied.",
                    code, expected, actual
                )
            }
            _ => self.to_string(),
        }
    }
}
