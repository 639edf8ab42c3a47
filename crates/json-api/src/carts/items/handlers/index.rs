//! Cart Item Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use atelier_app::sessions::SessionId;

use crate::{
    carts::{errors::into_status_error, items::handlers::CartItemResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemsResponse {
    /// Every line in the cart, including lines whose product was deleted
    pub items: Vec<CartItemResponse>,
}

/// Cart Item Index Handler
#[endpoint(tags("carts"), summary = "List Cart Items")]
pub(crate) async fn handler(
    session: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartItemsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .carts
        .list_items(SessionId::from(session.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartItemsResponse {
        items: items.into_iter().map(Into::into).collect(),
    }))
}
