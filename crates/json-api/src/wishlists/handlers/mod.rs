//! Wishlist Handlers

pub(crate) mod check;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::wishlists::records::WishlistItemRecord;

/// Wishlist Entry Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WishlistEntryResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,

    /// The date and time the product was saved
    pub created_at: String,
}

impl From<WishlistItemRecord> for WishlistEntryResponse {
    fn from(item: WishlistItemRecord) -> Self {
        Self {
            uuid: item.uuid.into(),
            product_uuid: item.product_uuid.into(),
            created_at: item.created_at.to_string(),
        }
    }
}
