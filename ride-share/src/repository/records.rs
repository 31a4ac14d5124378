//! Tabular row shapes for the data files.
//!
//! Rows are deserialized as loosely typed as the files allow and then
//! converted into domain types, which is where validation happens.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{Driver, NewTrip, Passenger, RecordId, ValidationError};

/// Timestamp layout used by the exported trip data, e.g. `2018-12-27 02:39:05 -0800`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// A row of `drivers.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverRow {
    pub id: i64,
    pub name: String,
    pub vin: String,
    pub status: String,
}

impl DriverRow {
    pub fn into_driver(self) -> Result<Driver, ValidationError> {
        Driver::from_parts(self.id, self.name, &self.vin, &self.status)
    }
}

/// A row of `passengers.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct PassengerRow {
    pub id: i64,
    pub name: String,
    pub phone_num: String,
}

impl PassengerRow {
    pub fn into_passenger(self) -> Result<Passenger, ValidationError> {
        Passenger::new(self.id, self.name, self.phone_num)
    }
}

/// A row of `trips.csv`. Empty cells mean the value is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRow {
    pub id: i64,
    pub driver_id: i64,
    pub passenger_id: i64,
    pub start_time: String,
    pub end_time: Option<String>,
    pub cost: Option<f64>,
    pub rating: Option<i64>,
}

/// Why a trip row could not become a [`NewTrip`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TripRowError {
    /// A time cell in neither accepted layout
    #[error("unparseable timestamp {0:?}")]
    Timestamp(String),

    /// A reference id or trip field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl TripRow {
    /// Parse timestamps and reference ids. Trip-level rules are checked
    /// later by [`crate::domain::Trip::new`].
    pub fn into_new_trip(self) -> Result<NewTrip, TripRowError> {
        let start_time = parse_timestamp(&self.start_time)?;
        let end_time = match self.end_time.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Some(parse_timestamp(s)?),
            _ => None,
        };

        Ok(NewTrip {
            id: self.id,
            passenger_id: RecordId::new(self.passenger_id)?,
            driver_id: RecordId::new(self.driver_id)?,
            start_time,
            end_time,
            cost: self.cost,
            rating: self.rating,
        })
    }
}

/// Parse a timestamp in the export layout, falling back to RFC 3339.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, TripRowError> {
    let s = s.trim();
    DateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| TripRowError::Timestamp(s.to_string()))
}
