//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use atelier_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("A product with this uuid or sku already exists")
        }
        ProductsServiceError::Validation(reason) => {
            StatusError::bad_request().brief(reason.to_string())
        }
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Sql(source) => {
            error!("product storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use atelier_app::domain::products::ProductValidationError;

    use super::*;

    #[test]
    fn validation_errors_carry_their_reason() {
        let error = into_status_error(ProductValidationError::ZeroPrice.into());

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "price must be greater than zero");
    }

    #[test]
    fn missing_products_map_to_404() {
        let error = into_status_error(ProductsServiceError::NotFound);

        assert_eq!(error.code, StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflicts_map_to_409() {
        let error = into_status_error(ProductsServiceError::AlreadyExists);

        assert_eq!(error.code, StatusCode::CONFLICT);
    }
}
