//! Cart Records

use jiff::Timestamp;
use serde::Serialize;

use crate::{domain::products::records::ProductUuid, sessions::SessionId, uuids::TypedUuid};

/// Cart Item UUID
pub type CartItemUuid = TypedUuid<CartItemRecord>;

/// A single cart line. Lines never carry a price; prices are read from the
/// catalog whenever the cart is enriched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemRecord {
    pub uuid: CartItemUuid,
    pub session: SessionId,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub selected_size: Option<String>,
    pub selected_frame: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
