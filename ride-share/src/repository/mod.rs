//! Record loading and the in-memory directory.
//!
//! Reads the tabular data files, builds the domain objects, and wires each
//! trip into the collections of the driver and passenger it names.

mod directory;
mod error;
mod loader;
mod records;

pub use directory::RideShare;
pub use error::RepositoryError;
pub use loader::{DRIVERS_FILE, PASSENGERS_FILE, TRIPS_FILE};
pub use records::{DriverRow, PassengerRow, TripRow, TripRowError, parse_timestamp};
