//! Get Wishlist Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use atelier_app::{
    domain::pricing::{EnrichedWishlistItem, enrich_wishlist},
    sessions::SessionId,
};

use crate::{
    extensions::*,
    products::schemas::ProductResponse,
    state::State,
    wishlists::{errors::into_status_error, handlers::WishlistEntryResponse},
};

/// Wishlist Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WishlistItemResponse {
    pub entry: WishlistEntryResponse,
    pub product: ProductResponse,
}

impl From<EnrichedWishlistItem> for WishlistItemResponse {
    fn from(item: EnrichedWishlistItem) -> Self {
        Self {
            entry: item.item.into(),
            product: item.product.into(),
        }
    }
}

/// Wishlist Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WishlistResponse {
    pub session: String,

    /// Saved products still in the catalog, oldest first
    pub items: Vec<WishlistItemResponse>,
}

/// Get Wishlist Handler
#[endpoint(tags("wishlists"), summary = "Get Wishlist")]
pub(crate) async fn handler(
    session: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<WishlistResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = SessionId::from(session.into_inner());

    let entries = state
        .app
        .wishlists
        .list_items(session.clone())
        .await
        .map_err(into_status_error)?;

    let products = state
        .app
        .products
        .get_products(entries.iter().map(|entry| entry.product_uuid).collect())
        .await
        .or_500("failed to load wishlist products")?;

    Ok(Json(WishlistResponse {
        session: session.into_inner(),
        items: enrich_wishlist(entries, &products)
            .into_iter()
            .map(Into::into)
            .collect(),
    }))
}
