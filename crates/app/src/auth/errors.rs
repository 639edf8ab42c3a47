//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthServiceError {
    #[error("invalid bearer token")]
    InvalidToken,

    #[error("admin access is disabled")]
    Disabled,
}
