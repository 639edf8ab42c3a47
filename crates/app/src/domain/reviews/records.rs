//! Review Records

use jiff::Timestamp;
use serde::Serialize;

use crate::{
    domain::{products::records::ProductUuid, reviews::errors::ReviewValidationError},
    uuids::TypedUuid,
};

/// Review UUID
pub type ReviewUuid = TypedUuid<ReviewRecord>;

/// A star rating between [`Rating::MIN`] and [`Rating::MAX`] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    ///
    /// Returns [`ReviewValidationError::RatingOutOfRange`] outside `1..=5`.
    pub fn new(value: i64) -> Result<Self, ReviewValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|rating| (Self::MIN..=Self::MAX).contains(rating))
            .map(Self)
            .ok_or(ReviewValidationError::RatingOutOfRange(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Review Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRecord {
    pub uuid: ReviewUuid,
    pub product_uuid: ProductUuid,
    pub customer_name: String,
    pub rating: Rating,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_inside_bounds_are_accepted() {
        for value in 1..=5 {
            assert_eq!(
                Rating::new(value).map(|rating| i64::from(rating.get())),
                Ok(value)
            );
        }
    }

    #[test]
    fn ratings_outside_bounds_are_rejected() {
        for value in [0, 6, -1, 256, i64::MAX] {
            assert_eq!(
                Rating::new(value),
                Err(ReviewValidationError::RatingOutOfRange(value))
            );
        }
    }
}
