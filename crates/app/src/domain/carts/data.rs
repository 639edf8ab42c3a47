//! Cart Data

use crate::domain::{carts::errors::CartsServiceError, products::records::ProductUuid};

/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: u32 = 999_999;

/// New Cart Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_uuid: ProductUuid,

    /// Requested amount. Absent adds a single unit; a new line never starts
    /// below one.
    pub quantity: Option<i64>,

    pub selected_size: Option<String>,
    pub selected_frame: Option<String>,
}

impl NewCartItem {
    /// The number of units this request adds to an existing line. Zero is
    /// allowed and leaves the line unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::InvalidQuantity`] for negative amounts and
    /// amounts above [`MAX_LINE_QUANTITY`].
    pub fn units(&self) -> Result<u32, CartsServiceError> {
        match self.quantity {
            None => Ok(1),
            Some(0) => Ok(0),
            Some(quantity) => line_quantity(quantity),
        }
    }
}

/// Quantity of a line created by adding `units`.
pub(crate) fn initial_quantity(units: u32) -> u32 {
    units.max(1)
}

/// Convert a strictly positive requested quantity into a line quantity.
pub(crate) fn line_quantity(quantity: i64) -> Result<u32, CartsServiceError> {
    u32::try_from(quantity)
        .ok()
        .filter(|quantity| (1..=MAX_LINE_QUANTITY).contains(quantity))
        .ok_or(CartsServiceError::InvalidQuantity)
}

/// Add `units` to an existing line quantity without exceeding the line limit.
pub(crate) fn merged_quantity(current: u32, units: u32) -> Result<u32, CartsServiceError> {
    current
        .checked_add(units)
        .filter(|quantity| *quantity <= MAX_LINE_QUANTITY)
        .ok_or(CartsServiceError::InvalidQuantity)
}
