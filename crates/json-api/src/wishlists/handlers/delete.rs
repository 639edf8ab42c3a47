//! Remove Wishlist Entry Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::sessions::SessionId;

use crate::{extensions::*, state::State, wishlists::errors::into_status_error};

/// Wishlist Entry Removed Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WishlistEntryRemovedResponse {
    /// Whether an entry was removed
    pub removed: bool,
}

/// Remove Wishlist Entry Handler
#[endpoint(tags("wishlists"), summary = "Remove from Wishlist")]
pub(crate) async fn handler(
    session: PathParam<String>,
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<WishlistEntryRemovedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let removed = state
        .app
        .wishlists
        .remove_item(
            SessionId::from(session.into_inner()),
            product.into_inner().into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(WishlistEntryRemovedResponse { removed }))
}
