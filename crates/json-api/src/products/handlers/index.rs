//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use atelier_app::domain::products::records::ProductKind;

use crate::{
    extensions::*,
    products::{errors::into_status_error, schemas::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns live products, oldest first, optionally restricted to one kind
/// (`painting` or `corporate_gift`).
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    kind: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let kind = kind
        .into_inner()
        .map(|kind| kind.parse::<ProductKind>())
        .transpose()
        .or_400()?;

    let products = state
        .app
        .products
        .list_products(kind)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use atelier_app::domain::products::{
        MockProductsService, ProductsServiceError,
        records::{ProductKind, ProductUuid},
    };

    use crate::products::schemas::ProductKindParam;
    use crate::test_helpers::{Mocks, make_gift, make_painting, storage_error};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        Mocks {
            products,
            ..Mocks::default()
        }
        .service(Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(Option::is_none)
            .return_once(|_| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        let response: ProductsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(response.products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_products_in_service_order() -> TestResult {
        let uuid_a = ProductUuid::new();
        let uuid_b = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(move |_| {
                Ok(vec![
                    make_painting(uuid_a, 100),
                    make_gift(uuid_b, 200, 10, Some(50)),
                ])
            });

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.products.len(), 2, "expected two products");
        assert_eq!(response.products[0].uuid, uuid_a.into_uuid());
        assert_eq!(response.products[0].kind, ProductKindParam::Painting);
        assert_eq!(response.products[1].uuid, uuid_b.into_uuid());
        assert_eq!(response.products[1].kind, ProductKindParam::CorporateGift);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_kind_filter() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|kind| *kind == Some(ProductKind::CorporateGift))
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/products?kind=corporate_gift")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_kind_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_list_products().never();

        let mut res = TestClient::get("http://example.com/products?kind=sculpture")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body = res.take_string().await?;

        assert!(
            body.contains("unknown product kind: sculpture"),
            "unexpected body: {body}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_service_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(storage_error())));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
