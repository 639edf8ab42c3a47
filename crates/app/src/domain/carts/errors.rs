//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::carts::data::MAX_LINE_QUANTITY;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("quantity must be between 1 and {max}", max = MAX_LINE_QUANTITY)]
    InvalidQuantity,

    #[error("cart item not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        // The quantity bounds are the only check constraint on cart lines.
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation) => Self::InvalidQuantity,
            Some(_) | None => Self::Sql(error),
        }
    }
}
