//! In-memory directory of drivers, passengers and trips.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::domain::{Driver, Passenger, RecordId, Trip};

use super::RepositoryError;

/// Every loaded entity, keyed by id.
///
/// Trips are shared: the same `Arc<Trip>` sits in the directory, in its
/// driver's collection and in its passenger's collection.
#[derive(Debug, Default)]
pub struct RideShare {
    drivers: BTreeMap<RecordId, Driver>,
    passengers: BTreeMap<RecordId, Passenger>,
    trips: Vec<Arc<Trip>>,
    /// Position of each trip in `trips`
    trip_index: HashMap<RecordId, usize>,
}

impl RideShare {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a driver.
    pub fn insert_driver(&mut self, driver: Driver) -> Result<(), RepositoryError> {
        let id = driver.id();
        if self.drivers.contains_key(&id) {
            return Err(RepositoryError::DuplicateId { kind: "driver", id });
        }
        self.drivers.insert(id, driver);
        Ok(())
    }

    /// Register a passenger.
    pub fn insert_passenger(&mut self, passenger: Passenger) -> Result<(), RepositoryError> {
        let id = passenger.id();
        if self.passengers.contains_key(&id) {
            return Err(RepositoryError::DuplicateId {
                kind: "passenger",
                id,
            });
        }
        self.passengers.insert(id, passenger);
        Ok(())
    }

    /// Register a trip and append it to its driver's and passenger's
    /// collections.
    ///
    /// Both referenced entities must already be present. Nothing is changed
    /// if any check fails.
    pub fn connect_trip(&mut self, trip: Trip) -> Result<Arc<Trip>, RepositoryError> {
        let id = trip.id();
        if self.trip_index.contains_key(&id) {
            return Err(RepositoryError::DuplicateId { kind: "trip", id });
        }
        let Some(passenger) = self.passengers.get_mut(&trip.passenger_id()) else {
            return Err(RepositoryError::UnknownPassenger {
                trip: id,
                passenger: trip.passenger_id(),
            });
        };
        let Some(driver) = self.drivers.get_mut(&trip.driver_id()) else {
            return Err(RepositoryError::UnknownDriver {
                trip: id,
                driver: trip.driver_id(),
            });
        };

        let trip = Arc::new(trip);
        driver.add_trip(Arc::clone(&trip));
        passenger.add_trip(Arc::clone(&trip));

        self.trip_index.insert(id, self.trips.len());
        self.trips.push(Arc::clone(&trip));
        Ok(trip)
    }

    pub fn driver(&self, id: RecordId) -> Option<&Driver> {
        self.drivers.get(&id)
    }

    pub fn passenger(&self, id: RecordId) -> Option<&Passenger> {
        self.passengers.get(&id)
    }

    pub fn trip(&self, id: RecordId) -> Option<&Arc<Trip>> {
        self.trip_index.get(&id).map(|&idx| &self.trips[idx])
    }

    /// Drivers in id order.
    pub fn drivers(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.values()
    }

    /// Passengers in id order.
    pub fn passengers(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.values()
    }

    /// Trips in the order they were connected.
    pub fn trips(&self) -> &[Arc<Trip>] {
        &self.trips
    }

    /// The driver a trip names, if loaded.
    pub fn trip_driver(&self, trip: &Trip) -> Option<&Driver> {
        self.driver(trip.driver_id())
    }

    /// The passenger a trip names, if loaded.
    pub fn trip_passenger(&self, trip: &Trip) -> Option<&Passenger> {
        self.passenger(trip.passenger_id())
    }
}
