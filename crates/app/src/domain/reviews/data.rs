//! Review Data

use crate::domain::reviews::{errors::ReviewValidationError, records::Rating};

/// New Review Data, as submitted by a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub customer_name: String,
    pub rating: i64,
    pub comment: Option<String>,
}

/// A review that passed validation and is ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidReview {
    pub customer_name: String,
    pub rating: Rating,
    pub comment: Option<String>,
}

impl NewReview {
    /// Validate and normalise the submission. Names and comments are trimmed
    /// and a blank comment becomes `None`.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(self) -> Result<ValidReview, ReviewValidationError> {
        let customer_name = self.customer_name.trim();

        if customer_name.is_empty() {
            return Err(ReviewValidationError::EmptyCustomerName);
        }

        let rating = Rating::new(self.rating)?;

        let comment = self
            .comment
            .as_deref()
            .map(str::trim)
            .filter(|comment| !comment.is_empty())
            .map(ToString::to_string);

        Ok(ValidReview {
            customer_name: customer_name.to_string(),
            rating,
            comment,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn review(customer_name: &str, rating: i64, comment: Option<&str>) -> NewReview {
        NewReview {
            customer_name: customer_name.to_string(),
            rating,
            comment: comment.map(ToString::to_string),
        }
    }

    #[test]
    fn valid_review_is_normalised() -> TestResult {
        let valid = review("  Ada ", 4, Some(" Lovely frame ")).validate()?;

        assert_eq!(
            valid,
            ValidReview {
                customer_name: "Ada".to_string(),
                rating: Rating::new(4)?,
                comment: Some("Lovely frame".to_string()),
            }
        );

        Ok(())
    }

    #[test]
    fn blank_comment_becomes_none() {
        let valid = review("Ada", 5, Some("   ")).validate();

        assert_eq!(valid.map(|valid| valid.comment), Ok(None));
    }

    #[test]
    fn blank_customer_name_is_rejected() {
        assert_eq!(
            review("   ", 3, None).validate(),
            Err(ReviewValidationError::EmptyCustomerName)
        );
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        assert_eq!(
            review("Ada", 6, None).validate(),
            Err(ReviewValidationError::RatingOutOfRange(6))
        );
        assert_eq!(
            review("Ada", 0, None).validate(),
            Err(ReviewValidationError::RatingOutOfRange(0))
        );
    }
}
