//! Set Cart Item Quantity Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::sessions::SessionId;

use crate::{
    carts::{errors::into_status_error, items::handlers::CartItemResponse},
    extensions::*,
    state::State,
};

/// Set Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetQuantityRequest {
    /// Absolute quantity. Zero or less removes the line.
    pub quantity: i64,
}

/// Set Quantity Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetQuantityResponse {
    /// The updated line, absent when the line was removed
    pub item: Option<CartItemResponse>,
}

/// Set Cart Item Quantity Handler
#[endpoint(
    tags("carts"),
    summary = "Set Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated or line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Product is not in the cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.update",
    skip(session, product, json, depot),
    fields(product_uuid = tracing::field::Empty, quantity = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<String>,
    product: PathParam<Uuid>,
    json: JsonBody<SetQuantityRequest>,
    depot: &mut Depot,
) -> Result<Json<SetQuantityResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = SessionId::from(session.into_inner());
    let product = product.into_inner();
    let quantity = json.into_inner().quantity;

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));
    span.record("quantity", quantity);

    let item = state
        .app
        .carts
        .set_quantity(session, product.into(), quantity)
        .await
        .map_err(into_status_error)?;

    if item.is_none() {
        tracing::info!(product_uuid = %product, "removed cart item");
    }

    Ok(Json(SetQuantityResponse {
        item: item.map(Into::into),
    }))
}
