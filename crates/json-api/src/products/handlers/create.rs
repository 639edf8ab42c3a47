//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::products::{
    data::{NewProduct, ProductFields},
    records::ProductUuid,
};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        schemas::{ProductRequest, ProductResponse},
    },
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Client-chosen identifier. Generated when absent.
    #[serde(default)]
    pub uuid: Option<Uuid>,

    #[serde(flatten)]
    pub product: ProductRequest,
}

/// Create Product Handler
#[endpoint(
    tags("admin"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(product_uuid = tracing::field::Empty, sku = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let uuid = request.uuid.map_or_else(ProductUuid::new, ProductUuid::from);
    let fields = ProductFields::try_from(request.product).or_400()?;

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(uuid));
    span.record("sku", tracing::field::display(&fields.sku));

    let product = state
        .app
        .products
        .create_product(NewProduct { uuid, fields })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_uuid = %uuid, kind = %product.kind(), "created product");

    Ok(Json(product.into()))
}
