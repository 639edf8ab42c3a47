//! Add Wishlist Entry Handler

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
    extensions::*,
    state::State,
    wishlists::{errors::into_status_error, handlers::WishlistEntryResponse},
};

/// Add Wishlist Entry Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateWishlistEntryRequest {
    pub product_uuid: Uuid,
}

/// Add Wishlist Entry Handler
///
/// Saving a product twice returns the existing entry.
#[endpoint(tags("wishlists"), summary = "Add to Wishlist")]
pub(crate) async fn handler(
    session: PathParam<String>,
    json: JsonBody<CreateWishlistEntryRequest>,
    depot: &mut Depot,
) -> Result<Json<WishlistEntryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let entry = state
        .app
        .wishlists
        .add_item(
            SessionId::from(session.into_inner()),
            json.into_inner().product_uuid.into(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(entry.into()))
}
