//! Error types for `bbs-timer`.
//!
//! Validation failures are deterministic: the same input always fails the
//! same way, so none of these carry retry hints.

use crate::time::{Endpoint, FieldKind};
use thiserror::Error;

/// Result type alias for timer operations.
pub type Result<T> = std::result::Result<T, TimerError>;

/// A time range that cannot be turned into a timer.
///
/// The validator reports only the first failure it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A numeric field fell outside its bound.
    #[error("Invalid time input: {endpoint} {field} is {value}, expected 0..={max}", max = .field.max())]
    OutOfRange {
        /// Endpoint holding the bad field
        endpoint: Endpoint,
        /// Which field
        field: FieldKind,
        /// The rejected magnitude
        value: u8,
    },

    /// Every field of one endpoint is disabled.
    #[error("{} time cannot be completely disabled", .endpoint.title())]
    EndpointFullyDisabled {
        /// The fully disabled endpoint
        endpoint: Endpoint,
    },

    /// Both endpoints have hours and minutes disabled.
    #[error("Both start and end times cannot have hours and minutes disabled simultaneously")]
    BothRangesHourMinuteDisabled,
}

/// Raw field text that could not be read as a [`Field`](crate::Field).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not `-`, empty, or a decimal number that fits in a byte.
    #[error("Invalid {field} value '{raw}': expected digits or '-'")]
    InvalidField {
        /// Field being parsed
        field: FieldKind,
        /// The offending text
        raw: String,
    },

    /// A time spec did not have exactly three `:`-separated parts.
    #[error("Invalid time '{raw}': expected HH:MM:SS (use '-' to disable a field)")]
    ComponentCount {
        /// The offending text
        raw: String,
    },
}

/// Umbrella error for the library.
#[derive(Debug, Error)]
pub enum TimerError {
    /// Range rejected by the validator
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Raw input could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
