//! Passenger type.

use std::sync::Arc;

use super::{RecordId, Trip, ValidationError};

/// A rider and the trips they have taken.
#[derive(Debug, Clone)]
pub struct Passenger {
    id: RecordId,
    name: String,
    phone_number: String,
    trips: Vec<Arc<Trip>>,
}

impl Passenger {
    /// Create a passenger with no trips.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `id < 1`.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Passenger {
            id: RecordId::new(id)?,
            name: name.into(),
            phone_number: phone_number.into(),
            trips: Vec::new(),
        })
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

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Trips in the order they were added.
    pub fn trips(&self) -> &[Arc<Trip>] {
        &self.trips
    }

    /// Append a trip. No check is made that the trip names this passenger.
    pub fn add_trip(&mut self, trip: Arc<Trip>) {
        self.trips.push(trip);
    }

    /// Total fare paid. In-progress trips have no cost and add nothing.
    pub fn net_expenditures(&self) -> f64 {
        self.trips.iter().filter_map(|trip| trip.cost()).sum()
    }

    /// Total riding time in seconds. In-progress trips add nothing.
    pub fn total_time_spent(&self) -> f64 {
        self.trips
            .iter()
            .filter_map(|trip| trip.trip_duration().ok())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewTrip;
    use crate::domain::trip::fixtures::*;

    fn passenger() -> Passenger {
        Passenger::new(1, "Smithy", "353-533-5334").unwrap()
    }

    fn trip(data: NewTrip) -> Arc<Trip> {
        Arc::new(Trip::new(data).unwrap())
    }

    #[test]
    fn new_sets_fields() {
        let p = passenger();
        assert_eq!(p.id(), id(1));
        assert_eq!(p.name(), "Smithy");
        assert_eq!(p.phone_number(), "353-533-5334");
        assert!(p.trips().is_empty());
    }

    #[test]
    fn rejects_bad_id() {
        assert_eq!(
            Passenger::new(0, "Smithy", "353-533-5334").unwrap_err(),
            ValidationError::InvalidId(0)
        );
    }

    #[test]
    fn accepts_large_id() {
        let p = Passenger::new(4_294_967_296, "P", "555").unwrap();
        assert_eq!(p.id().get(), 4_294_967_296);
    }

    #[test]
    fn trips_keep_passenger_id() {
        let mut p = Passenger::new(9, "Merl Glover III", "1-602-620-2330 x3723").unwrap();
        let mut data = completed(8, 24 * 60, 10.0, 5);
        data.passenger_id = p.id();
        p.add_trip(trip(data));

        for t in p.trips() {
            assert_eq!(t.passenger_id(), id(9));
        }
    }

    #[test]
    fn add_trip_appends_in_order() {
        let mut p = passenger();
        p.add_trip(trip(completed(3, 10, 5.0, 4)));
        p.add_trip(trip(completed(1, 10, 5.0, 4)));
        let ids: Vec<_> = p.trips().iter().map(|t| t.id().get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn with_trips_replaces_collection() {
        let p = passenger().with_trips(vec![trip(completed(1, 10, 5.0, 4))]);
        assert_eq!(p.trips().len(), 1);
    }

    #[test]
    fn net_expenditures_empty_is_zero() {
        assert_eq!(passenger().net_expenditures(), 0.0);
    }

    #[test]
    fn net_expenditures_sums_costs() {
        let mut p = passenger();
        p.add_trip(trip(completed(8, 24 * 60, 45.0, 5)));
        p.add_trip(trip(completed(9, 24 * 60, 20.0, 5)));
        p.add_trip(trip(completed(10, 24 * 60, 40.0, 4)));
        assert_close(p.net_expenditures(), 105.0);
    }

    #[test]
    fn net_expenditures_skips_in_progress() {
        let mut p = passenger();
        p.add_trip(trip(in_progress(8)));
        p.add_trip(trip(completed(9, 24 * 60, 20.0, 5)));
        p.add_trip(trip(completed(10, 24 * 60, 40.0, 4)));
        assert_close(p.net_expenditures(), 60.0);
    }

    #[test]
    fn total_time_spent_empty_is_zero() {
        assert_eq!(passenger().total_time_spent(), 0.0);
    }

    #[test]
    fn total_time_spent_sums_durations() {
        let mut p = passenger();
        p.add_trip(trip(completed(8, 10, 45.0, 5)));
        p.add_trip(trip(completed(9, 20, 20.0, 5)));
        p.add_trip(trip(completed(10, 30, 40.0, 4)));
        assert_close(p.total_time_spent(), 60.0 * 60.0);
    }

    #[test]
    fn total_time_spent_skips_in_progress() {
        let mut p = passenger();
        p.add_trip(trip(in_progress(8)));
        p.add_trip(trip(completed(9, 20, 20.0, 5)));
        p.add_trip(trip(completed(10, 30, 40.0, 4)));
        assert_close(p.total_time_spent(), 50.0 * 60.0);
    }
}
