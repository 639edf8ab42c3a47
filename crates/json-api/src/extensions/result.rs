//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{debug, error};

/// Map errors onto HTTP errors.
pub(crate) trait ResultExt<T> {
    /// Log the error and answer with a generic internal server error.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Answer with a bad request carrying the error message.
    fn or_400(self) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self) -> Result<T, StatusError> {
        self.map_err(|error| {
            debug!("rejected request: {error}");

            StatusError::bad_request().brief(error.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_500_hides_the_error() {
        let error = Err::<(), _>("connection reset")
            .or_500("failed to load cart")
            .err();

        assert_eq!(
            error.map(|error| error.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[test]
    fn or_400_carries_the_message() {
        let error = Err::<(), _>("rating must be between 1 and 5").or_400().err();

        assert_eq!(
            error.as_ref().map(|error| error.code),
            Some(StatusCode::BAD_REQUEST)
        );
        assert_eq!(
            error.map(|error| error.brief),
            Some("rating must be between 1 and 5".to_string())
        );
    }

    #[test]
    fn ok_values_pass_through() {
        assert_eq!(Ok::<_, String>(7).or_400().ok(), Some(7));
    }
}
