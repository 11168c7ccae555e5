use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A closed booking interval `[start, end]` over integer time slots.
///
/// Invariant: `start <= end`. Serialized on the wire as a two-element
/// array `[start, end]`, which is also the shape accepted by
/// [`crate::merge::merge_pairs`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "[i64; 2]", into = "[i64; 2]")]
pub struct Booking {
    start: i64,
    end: i64,
}

impl Booking {
    pub fn new(start: i64, end: i64) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidBooking { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// True when `other` overlaps this booking or starts exactly where
    /// it ends. Adjacency counts as continuity.
    pub fn touches_or_overlaps(&self, other: &Booking) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn contains_point(&self, point: i64) -> bool {
        self.start <= point && point <= self.end
    }

    /// Extends this booking to also cover `other`. Callers are expected
    /// to have checked `touches_or_overlaps` first; extending past a gap
    /// would cover slots neither input did.
    pub(crate) fn absorb(&mut self, other: &Booking) {
        self.end = self.end.max(other.end);
    }
}

impl TryFrom<[i64; 2]> for Booking {
    type Error = CoreError;

    fn try_from(pair: [i64; 2]) -> Result<Self, Self::Error> {
        Booking::new(pair[0], pair[1])
    }
}

impl From<Booking> for [i64; 2] {
    fn from(booking: Booking) -> Self {
        [booking.start, booking.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        let err = Booking::new(12, 9).unwrap_err();
        assert_eq!(err, CoreError::InvalidBooking { start: 12, end: 9 });
    }

    #[test]
    fn zero_length_booking_is_valid() {
        let booking = Booking::new(10, 10).unwrap();
        assert!(booking.contains_point(10));
        assert!(!booking.contains_point(11));
    }

    #[test]
    fn touching_counts_as_overlap() {
        let a = Booking::new(9, 10).unwrap();
        let b = Booking::new(10, 11).unwrap();
        assert!(a.touches_or_overlaps(&b));
        assert!(b.touches_or_overlaps(&a));
    }

    #[test]
    fn gap_does_not_overlap() {
        let a = Booking::new(9, 10).unwrap();
        let b = Booking::new(11, 12).unwrap();
        assert!(!a.touches_or_overlaps(&b));
    }

    #[test]
    fn serializes_as_pair() {
        let booking = Booking::new(9, 12).unwrap();
        assert_eq!(serde_json::to_string(&booking).unwrap(), "[9,12]");

        let parsed: Booking = serde_json::from_str("[14,17]").unwrap();
        assert_eq!(parsed, Booking::new(14, 17).unwrap());
    }

    #[test]
    fn deserialization_validates_bounds() {
        let result: Result<Booking, _> = serde_json::from_str("[17,14]");
        assert!(result.is_err());
    }
}
