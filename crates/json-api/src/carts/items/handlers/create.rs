//! Add Cart Item Handler

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

use atelier_app::{domain::carts::data::NewCartItem, sessions::SessionId};

use crate::{
    carts::{errors::into_status_error, items::handlers::CartItemResponse},
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartItemRequest {
    pub product_uuid: Uuid,

    /// Units to add. Absent or zero adds one.
    #[serde(default)]
    pub quantity: Option<i64>,

    /// Replaces the line's size when present
    #[serde(default)]
    pub selected_size: Option<String>,

    /// Replaces the line's frame when present
    #[serde(default)]
    pub selected_frame: Option<String>,
}

impl From<CreateCartItemRequest> for NewCartItem {
    fn from(request: CreateCartItemRequest) -> Self {
        NewCartItem {
            product_uuid: request.product_uuid.into(),
            quantity: request.quantity,
            selected_size: request.selected_size,
            selected_frame: request.selected_frame,
        }
    }
}

/// Add Cart Item Handler
///
/// Adds units of a product, merging into the existing line for that product.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart line created or merged"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.create",
    skip(session, json, depot, res),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<String>,
    json: JsonBody<CreateCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = SessionId::from(session.into_inner());
    let request = json.into_inner();

    tracing::Span::current().record(
        "product_uuid",
        tracing::field::display(request.product_uuid),
    );

    let item = state
        .app
        .carts
        .add_item(session, request.into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    tracing::info!(
        product_uuid = %item.product_uuid,
        quantity = item.quantity,
        "added cart item"
    );

    Ok(Json(item.into()))
}
