//! Domain types for the ride-share model.
//!
//! Drivers, passengers and the trips linking them. All types enforce their
//! invariants at construction time, so code that receives these types can
//! trust their validity.

mod driver;
mod error;
mod passenger;
mod record_id;
mod status;
pub(crate) mod trip;
mod vin;

pub use driver::{DRIVER_SHARE, Driver, PLATFORM_FEE, driver_take};
pub use error::ValidationError;
pub use passenger::Passenger;
pub use record_id::RecordId;
pub use status::DriverStatus;
pub use trip::{MAX_RATING, MIN_RATING, NewTrip, Trip};
pub use vin::{VIN_LENGTH, Vin};
