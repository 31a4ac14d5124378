//! Record identifier type.

use std::fmt;

use super::ValidationError;

/// A positive integer identifying a driver, passenger or trip.
///
/// Identifiers are unique per entity kind. Zero and negative values are
/// rejected, so any `RecordId` in hand is at least 1.
///
/// # Examples
///
/// ```
/// use ride_share::domain::RecordId;
///
/// let id = RecordId::new(42).unwrap();
/// assert_eq!(id.get(), 42);
///
/// assert!(RecordId::new(0).is_err());
/// assert!(RecordId::new(-1).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    /// Create an identifier, rejecting anything below 1.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::InvalidId(value));
        }
        // Positive, so the conversion is lossless
        Ok(RecordId(value as u64))
    }

    /// Returns the numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive() {
        assert!(RecordId::new(1).is_ok());
        assert!(RecordId::new(8).is_ok());
        assert!(RecordId::new(i64::MAX).is_ok());
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(RecordId::new(0), Err(ValidationError::InvalidId(0)));
        assert_eq!(RecordId::new(-5), Err(ValidationError::InvalidId(-5)));
    }

    #[test]
    fn accepts_ids_beyond_32_bits() {
        let id = RecordId::new(4_294_967_296).unwrap();
        assert_eq!(id.get(), 4_294_967_296);
    }

    #[test]
    fn display_and_debug() {
        let id = RecordId::new(9).unwrap();
        assert_eq!(format!("{}", id), "9");
        assert_eq!(format!("{:?}", id), "RecordId(9)");
    }

    #[test]
    fn ordering_follows_value() {
        let a = RecordId::new(2).unwrap();
        let b = RecordId::new(10).unwrap();
        assert!(a < b);
    }
}
