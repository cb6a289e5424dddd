//! Core data types and errors.

/// Travel time in whole minutes. Edge weights are always positive.
pub type Minutes = u32;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransitError {
    #[error("Unknown station: {0}")]
    UnknownStation(String),

    #[error("Malformed line {line}: {stations} stations but {minutes} segment times")]
    MalformedLine {
        line: String,
        stations: usize,
        minutes: usize,
    },

    #[error("Invalid weight between {from} and {to}: travel time must be at least one minute")]
    InvalidWeight { from: String, to: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, TransitError>;
