//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use atelier_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief(CartsServiceError::InvalidQuantity.to_string())
        }
        CartsServiceError::NotFound => StatusError::not_found().brief("Product is not in the cart"),
        CartsServiceError::Sql(source) => {
            error!("cart storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
