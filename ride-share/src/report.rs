//! Derived summaries of drivers, passengers and trips.
//!
//! These are the read-only views handed to reporting callers: identity
//! fields plus the computed metrics, flattened into serializable structs.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::domain::{Driver, Passenger, Trip};

/// A trip and its duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub id: u64,
    pub driver_id: u64,
    pub passenger_id: u64,
    /// RFC 3339, UTC
    pub start_time: String,
    pub end_time: Option<String>,
    pub cost: Option<f64>,
    pub rating: Option<u8>,
    /// Absent while the trip is in progress
    pub duration_secs: Option<f64>,
    pub in_progress: bool,
}

impl TripReport {
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            id: trip.id().get(),
            driver_id: trip.driver_id().get(),
            passenger_id: trip.passenger_id().get(),
            start_time: trip.start_time().to_rfc3339_opts(SecondsFormat::Secs, true),
            end_time: trip
                .end_time()
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            cost: trip.cost(),
            rating: trip.rating(),
            duration_secs: trip.trip_duration().ok(),
            in_progress: trip.is_in_progress(),
        }
    }
}

/// A driver with rating and revenue figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverReport {
    pub id: u64,
    pub name: String,
    pub vin: String,
    pub status: String,
    pub trip_count: usize,
    pub average_rating: f64,
    pub total_revenue: f64,
}

impl DriverReport {
    pub fn from_driver(driver: &Driver) -> Self {
        Self {
            id: driver.id().get(),
            name: driver.name().to_string(),
            vin: driver.vin().to_string(),
            status: driver.status().to_string(),
            trip_count: driver.trips().len(),
            average_rating: driver.average_rating(),
            total_revenue: driver.total_revenue(),
        }
    }
}

/// A passenger with spending and riding-time figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassengerReport {
    pub id: u64,
    pub name: String,
    pub phone_number: String,
    pub trip_count: usize,
    pub net_expenditures: f64,
    pub total_time_spent_secs: f64,
}

impl PassengerReport {
    pub fn from_passenger(passenger: &Passenger) -> Self {
        Self {
            id: passenger.id().get(),
            name: passenger.name().to_string(),
            phone_number: passenger.phone_number().to_string(),
            trip_count: passenger.trips().len(),
            net_expenditures: passenger.net_expenditures(),
            total_time_spent_secs: passenger.total_time_spent(),
        }
    }
}
