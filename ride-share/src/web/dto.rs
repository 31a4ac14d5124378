//! Data transfer objects for web responses.

use serde::Serialize;

use crate::report::TripReport;

/// A trip with the names of the people on it.
#[derive(Debug, Serialize)]
pub struct TripDetailResponse {
    #[serde(flatten)]
    pub trip: TripReport,

    /// Resolved from the trip's driver id
    pub driver_name: Option<String>,

    /// Resolved from the trip's passenger id
    pub passenger_name: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
