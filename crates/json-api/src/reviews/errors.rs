//! Review Errors

use salvo::http::StatusError;
use tracing::error;

use atelier_app::domain::reviews::ReviewsServiceError;

pub(crate) fn into_status_error(error: ReviewsServiceError) -> StatusError {
    match error {
        ReviewsServiceError::Validation(reason) => {
            StatusError::bad_request().brief(reason.to_string())
        }
        ReviewsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid review payload")
        }
        ReviewsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ReviewsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Review already exists")
        }
        ReviewsServiceError::Sql(source) => {
            error!("review storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use atelier_app::domain::reviews::ReviewValidationError;

    use super::*;

    #[test]
    fn rating_out_of_range_maps_to_400() {
        let error = into_status_error(ReviewValidationError::RatingOutOfRange(6).into());

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_product_maps_to_404() {
        let error = into_status_error(ReviewsServiceError::NotFound);

        assert_eq!(error.code, StatusCode::NOT_FOUND);
    }
}
