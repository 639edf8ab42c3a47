//! Check Wishlist Entry Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::sessions::SessionId;

use crate::{extensions::*, state::State, wishlists::errors::into_status_error};

/// Wishlist Check Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WishlistCheckResponse {
    pub is_in_wishlist: bool,
}

/// Check Wishlist Entry Handler
///
/// Clients toggle an entry by checking it and then adding or removing it.
#[endpoint(tags("wishlists"), summary = "Check Wishlist Entry")]
pub(crate) async fn handler(
    session: PathParam<String>,
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<WishlistCheckResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let is_in_wishlist = state
        .app
        .wishlists
        .contains(
            SessionId::from(session.into_inner()),
            product.into_inner().into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(WishlistCheckResponse { is_in_wishlist }))
}
