//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use atelier_app::domain::products::data::ProductFields;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        schemas::{ProductRequest, ProductResponse},
    },
    state::State,
};

/// Update Product Handler
///
/// Replaces every admin-owned attribute. Rating summaries are kept.
#[endpoint(
    tags("admin"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "SKU already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(
        product_uuid = tracing::field::Empty,
        price = tracing::field::Empty,
        sale_price = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner();
    let fields = ProductFields::try_from(json.into_inner()).or_400()?;

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));
    span.record("price", fields.price);

    if let Some(sale_price) = fields.sale_price {
        span.record("sale_price", sale_price);
    }

    let updated = state
        .app
        .products
        .update_product(product.into(), fields)
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %product, price = updated.price, "updated product");

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use atelier_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductUuid,
    };

    use crate::{
        products::schemas::tests::painting_request,
        test_helpers::{Mocks, make_painting},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        Mocks {
            products,
            ..Mocks::default()
        }
        .service(Router::with_path("admin/products/{product}").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let uuid = ProductUuid::new();
        let request = ProductRequest {
            sale_price: Some(90_000),
            ..painting_request()
        };
        let expected = ProductFields::try_from(request.clone())?;

        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(move |product, fields| *product == uuid && *fields == expected)
            .return_once(move |_, fields| {
                let mut updated = make_painting(uuid, fields.price);

                updated.sale_price = fields.sale_price;

                Ok(updated)
            });

        let mut res = TestClient::put(format!("http://example.com/admin/products/{uuid}"))
            .json(&request)
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.price, 120_000);
        assert_eq!(body.sale_price, Some(90_000));
        assert_eq!(body.effective_price, 90_000);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(format!(
            "http://example.com/admin/products/{}",
            Uuid::now_v7()
        ))
        .json(&painting_request())
        .send(&make_service(products))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_sku_conflict_returns_409() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::AlreadyExists));

        let res = TestClient::put(format!(
            "http://example.com/admin/products/{}",
            Uuid::now_v7()
        ))
        .json(&painting_request())
        .send(&make_service(products))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
