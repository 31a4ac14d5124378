//! Trip type.
//!
//! A `Trip` links one passenger and one driver. Both sides are held as
//! identifiers and resolved through [`crate::repository::RideShare`], so a
//! trip can be built before, after or without the entities it names.

use chrono::{DateTime, Utc};

use super::{RecordId, ValidationError};

/// Lowest accepted rating.
pub const MIN_RATING: i64 = 1;
/// Highest accepted rating.
pub const MAX_RATING: i64 = 5;

/// Unvalidated trip data, as handed to [`Trip::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub id: i64,
    pub passenger_id: RecordId,
    pub driver_id: RecordId,
    pub start_time: DateTime<Utc>,
    /// Absent while the trip is in progress
    pub end_time: Option<DateTime<Utc>>,
    pub cost: Option<f64>,
    pub rating: Option<i64>,
}

/// A single ride.
///
/// # Invariants
///
/// - `end_time`, when present, is strictly after `start_time`
/// - `rating`, when present, is in `1..=5`
///
/// A trip without an end time is in progress. Asking such a trip for its
/// duration is an error; the aggregate folds on drivers and passengers
/// count it as zero instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    id: RecordId,
    passenger_id: RecordId,
    driver_id: RecordId,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    cost: Option<f64>,
    rating: Option<u8>,
}

impl Trip {
    /// Validate and build a trip.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `id < 1`
    /// - `rating` is present and outside `1..=5`
    /// - `end_time` is present and not strictly after `start_time`
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use ride_share::domain::{NewTrip, RecordId, Trip};
    ///
    /// let start = Utc.with_ymd_and_hms(2018, 5, 25, 11, 0, 0).unwrap();
    /// let trip = Trip::new(NewTrip {
    ///     id: 8,
    ///     passenger_id: RecordId::new(1).unwrap(),
    ///     driver_id: RecordId::new(4).unwrap(),
    ///     start_time: start,
    ///     end_time: Some(start + Duration::minutes(25)),
    ///     cost: Some(23.45),
    ///     rating: Some(3),
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(trip.trip_duration().unwrap(), 1500.0);
    /// ```
    pub fn new(new: NewTrip) -> Result<Self, ValidationError> {
        let id = RecordId::new(new.id)?;

        let rating = match new.rating {
            Some(r) if !(MIN_RATING..=MAX_RATING).contains(&r) => {
                return Err(ValidationError::InvalidRating(r));
            }
            // In range, so the narrowing is lossless
            Some(r) => Some(r as u8),
            None => None,
        };

        if let Some(end) = new.end_time {
            if end <= new.start_time {
                return Err(ValidationError::EndBeforeStart);
            }
        }

        Ok(Trip {
            id,
            passenger_id: new.passenger_id,
            driver_id: new.driver_id,
            start_time: new.start_time,
            end_time: new.end_time,
            cost: new.cost,
            rating,
        })
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn passenger_id(&self) -> RecordId {
        self.passenger_id
    }

    pub fn driver_id(&self) -> RecordId {
        self.driver_id
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    /// Returns true if the trip has no end time yet.
    pub fn is_in_progress(&self) -> bool {
        self.end_time.is_none()
    }

    /// Returns the trip length in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TripInProgress`] if the trip has not ended.
    pub fn trip_duration(&self) -> Result<f64, ValidationError> {
        let end = self
            .end_time
            .ok_or(ValidationError::TripInProgress(self.id))?;
        let millis = end.signed_duration_since(self.start_time).num_milliseconds();
        Ok(millis as f64 / 1000.0)
    }
}
