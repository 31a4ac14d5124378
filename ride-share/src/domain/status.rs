//! Driver availability status.

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Whether a driver can currently take trips.
///
/// Set when the driver is created. Nothing in this crate transitions it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DriverStatus {
    #[default]
    Available,
    Unavailable,
}

impl DriverStatus {
    /// Returns the canonical upper-case spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "AVAILABLE",
            DriverStatus::Unavailable => "UNAVAILABLE",
        }
    }
}

impl FromStr for DriverStatus {
    type Err = ValidationError;

    /// Only the exact spellings `AVAILABLE` and `UNAVAILABLE` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(DriverStatus::Available),
            "UNAVAILABLE" => Ok(DriverStatus::Unavailable),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
