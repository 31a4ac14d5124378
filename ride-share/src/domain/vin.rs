//! Vehicle identification number type.

use std::fmt;

use super::ValidationError;

/// Required VIN length, in characters.
pub const VIN_LENGTH: usize = 17;

/// A vehicle identification number.
///
/// The only rule enforced is the length: exactly 17 characters. Content is
/// otherwise kept verbatim.
///
/// # Examples
///
/// ```
/// use ride_share::domain::Vin;
///
/// let vin = Vin::parse("1C9EVBRM0YBC564DZ").unwrap();
/// assert_eq!(vin.as_str(), "1C9EVBRM0YBC564DZ");
///
/// assert!(Vin::parse("TOO-SHORT").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vin(String);

impl Vin {
    /// Parse a VIN, checking its length.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let length = s.chars().count();
        if length != VIN_LENGTH {
            return Err(ValidationError::InvalidVin { length });
        }
        Ok(Vin(s.to_string()))
    }

    /// Returns the VIN as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vin({})", self.0)
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
