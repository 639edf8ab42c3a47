//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::sessions::SessionId;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Item Removed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemRemovedResponse {
    /// Whether a line was removed
    pub removed: bool,
}

/// Remove Cart Item Handler
///
/// Removing a product that is not in the cart succeeds with `removed: false`.
#[endpoint(tags("carts"), summary = "Remove Cart Item")]
pub(crate) async fn handler(
    session: PathParam<String>,
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartItemRemovedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let removed = state
        .app
        .carts
        .remove_item(
            SessionId::from(session.into_inner()),
            product.into_inner().into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartItemRemovedResponse { removed }))
}
