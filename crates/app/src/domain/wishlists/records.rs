//! Wishlist Records

use jiff::Timestamp;
use serde::Serialize;

use crate::{domain::products::records::ProductUuid, sessions::SessionId, uuids::TypedUuid};

/// Wishlist Item UUID
pub type WishlistItemUuid = TypedUuid<WishlistItemRecord>;

/// Wishlist Item Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishlistItemRecord {
    pub uuid: WishlistItemUuid,
    pub session: SessionId,
    pub product_uuid: ProductUuid,
    pub created_at: Timestamp,
}
