//! Reviews service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Rejections raised before any review is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewValidationError {
    #[error("customer name must not be empty")]
    EmptyCustomerName,

    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(i64),
}

#[derive(Debug, Error)]
pub enum ReviewsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("review already exists")]
    AlreadyExists,

    #[error("invalid review: {0}")]
    Validation(#[from] ReviewValidationError),

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ReviewsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        // Reviews only reference products, so a dangling reference means the
        // product is gone.
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::NotFound,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
