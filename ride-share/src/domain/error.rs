//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! raised when an entity is constructed from bad data, or when a per-trip
//! query needs data that an in-progress trip does not have yet.

use super::RecordId;

/// Validation failures for drivers, passengers and trips.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Identifiers must be positive
    #[error("invalid id {0}: must be at least 1")]
    InvalidId(i64),

    /// Vehicle identifiers are exactly 17 characters
    #[error("invalid VIN: must be exactly 17 characters, got {length}")]
    InvalidVin { length: usize },

    /// Driver status outside the closed set
    #[error("invalid status {0:?}: must be one of AVAILABLE or UNAVAILABLE")]
    InvalidStatus(String),

    /// Ratings are 1 to 5 inclusive
    #[error("invalid rating {0}: must be between 1 and 5")]
    InvalidRating(i64),

    /// End time not strictly after the start time
    #[error("invalid trip times: end time must be after start time")]
    EndBeforeStart,

    /// A duration was requested for a trip that has not finished
    #[error("trip {0} is still in progress")]
    TripInProgress(RecordId),
}
