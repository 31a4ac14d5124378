//! Driver type and revenue rules.

use std::sync::Arc;

use super::{DriverStatus, RecordId, Trip, ValidationError, Vin};

/// Flat platform fee taken from each fare before the revenue split.
pub const PLATFORM_FEE: f64 = 1.65;

/// Share of the post-fee fare paid to the driver.
pub const DRIVER_SHARE: f64 = 0.80;

/// Round to two decimal places, halves away from zero.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The driver's take from a single fare, rounded to cents.
///
/// Fares at or below the platform fee are split without deducting it.
///
/// ```
/// use ride_share::domain::driver_take;
///
/// assert_eq!(driver_take(1.00), 0.80);
/// assert_eq!(driver_take(5.00), 2.68);
/// ```
pub fn driver_take(cost: f64) -> f64 {
    if cost <= PLATFORM_FEE {
        round_cents(cost * DRIVER_SHARE)
    } else {
        round_cents((cost - PLATFORM_FEE) * DRIVER_SHARE)
    }
}

/// A vehicle operator and the trips they have driven.
#[derive(Debug, Clone)]
pub struct Driver {
    id: RecordId,
    name: String,
    vin: Vin,
    status: DriverStatus,
    trips: Vec<Arc<Trip>>,
}

impl Driver {
    /// Create an available driver with no trips.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `id < 1` or the VIN is not 17 characters.
    pub fn new(id: i64, name: impl Into<String>, vin: &str) -> Result<Self, ValidationError> {
        Ok(Driver {
            id: RecordId::new(id)?,
            name: name.into(),
            vin: Vin::parse(vin)?,
            status: DriverStatus::default(),
            trips: Vec::new(),
        })
    }

    /// Create a driver from unparsed record fields.
    ///
    /// Checks run in order (id, VIN, status) and the first failure is
    /// returned.
    ///
    /// ```
    /// use ride_share::domain::{Driver, DriverStatus, ValidationError};
    ///
    /// let driver = Driver::from_parts(3, "Daryl", "SAL6P2M2XNHC5Y656", "UNAVAILABLE").unwrap();
    /// assert_eq!(driver.status(), DriverStatus::Unavailable);
    ///
    /// let err = Driver::from_parts(3, "Daryl", "SAL6P2M2XNHC5Y656", "BUSY").unwrap_err();
    /// assert_eq!(err, ValidationError::InvalidStatus("BUSY".into()));
    /// ```
    pub fn from_parts(
        id: i64,
        name: impl Into<String>,
        vin: &str,
        status: &str,
    ) -> Result<Self, ValidationError> {
        let driver = Driver::new(id, name, vin)?;
        let status: DriverStatus = status.parse()?;
        Ok(driver.with_status(status))
    }

    /// Set the status.
    pub fn with_status(mut self, status: DriverStatus) -> Self {
        self.status = status;
        self
    }

    /// Replace the trip collection.
    pub fn with_trips(mut self, trips: Vec<Arc<Trip>>) -> Self {
        self.trips = trips;
        self
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vin(&self) -> &Vin {
        &self.vin
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    /// Trips in the order they were added.
    pub fn trips(&self) -> &[Arc<Trip>] {
        &self.trips
    }

    /// Append a trip. No check is made that the trip names this driver.
    pub fn add_trip(&mut self, trip: Arc<Trip>) {
        self.trips.push(trip);
    }

    /// Mean rating over rated trips.
    ///
    /// Unrated (in-progress) trips are left out of both the sum and the
    /// count. Returns 0 when no trip carries a rating.
    pub fn average_rating(&self) -> f64 {
        let (sum, count) = self
            .trips
            .iter()
            .filter_map(|trip| trip.rating())
            .fold((0u32, 0u32), |(sum, count), r| (sum + r as u32, count + 1));

        if count == 0 {
            0.0
        } else {
            sum as f64 / count as f64
        }
    }

    /// Sum of the driver's per-trip takes.
    ///
    /// Each take is rounded to cents before summing. Trips without a cost
    /// are skipped.
    pub fn total_revenue(&self) -> f64 {
        self.trips
            .iter()
            .filter_map(|trip| trip.cost())
            .map(driver_take)
            .sum()
    }
}
