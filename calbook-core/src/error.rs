//! Error types for store operations.

use thiserror::Error;

use crate::conflict::Conflict;

/// Errors that can occur when mutating the event store.
///
/// All variants are recoverable business errors, reported to the caller as a
/// failed response rather than a transport fault.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid time interval: end time must be after start time")]
    InvalidInterval,

    #[error("Schedule conflicts detected: {}", format_conflicts(.0))]
    Conflicts(Vec<Conflict>),

    #[error("Event not found")]
    NotFound,
}

fn format_conflicts(conflicts: &[Conflict]) -> String {
    conflicts
        .iter()
        .map(Conflict::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
