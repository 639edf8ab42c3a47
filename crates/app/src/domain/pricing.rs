//! Price derivation and enrichment.
//!
//! Cart and wishlist rows only reference products. Prices and availability are
//! resolved against the catalog every time a cart is read, so catalog edits
//! apply to carts that have not been checked out. Rows whose product is
//! missing or deleted are dropped from the enriched view.

use rustc_hash::FxHashMap;

use crate::domain::{
    carts::records::CartItemRecord,
    products::records::{ProductDetails, ProductRecord, ProductUuid},
    wishlists::records::WishlistItemRecord,
};

/// The price a customer pays for one unit: the sale price when set,
/// otherwise the base price.
#[must_use]
pub fn effective_unit_price(product: &ProductRecord) -> u64 {
    product.sale_price.unwrap_or(product.price)
}

/// Whether a line could be purchased as it stands. Purely informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAvailability {
    Available,
    Sold,
    BelowMinimum { min: u32 },
    AboveMaximum { max: u32 },
}

impl LineAvailability {
    #[must_use]
    pub fn of(product: &ProductRecord, quantity: u32) -> Self {
        match product.details {
            ProductDetails::Painting { sold: true, .. } => Self::Sold,
            ProductDetails::Painting { sold: false, .. } => Self::Available,
            ProductDetails::CorporateGift { min_quantity, .. } if quantity < min_quantity => {
                Self::BelowMinimum { min: min_quantity }
            }
            ProductDetails::CorporateGift {
                max_quantity: Some(max),
                ..
            } if quantity > max => Self::AboveMaximum { max },
            ProductDetails::CorporateGift { .. } => Self::Available,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCartLine {
    pub item: CartItemRecord,
    pub product: ProductRecord,
    pub unit_price: u64,
    pub line_total: u64,
    pub availability: LineAvailability,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedCart {
    pub lines: Vec<EnrichedCartLine>,
    pub subtotal: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedWishlistItem {
    pub item: WishlistItemRecord,
    pub product: ProductRecord,
}

fn live_products(products: &[ProductRecord]) -> FxHashMap<ProductUuid, &ProductRecord> {
    products
        .iter()
        .filter(|product| product.deleted_at.is_none())
        .map(|product| (product.uuid, product))
        .collect()
}

/// Join cart lines with their products and total them.
#[must_use]
pub fn enrich_cart(lines: Vec<CartItemRecord>, products: &[ProductRecord]) -> EnrichedCart {
    let products = live_products(products);

    let lines: Vec<EnrichedCartLine> = lines
        .into_iter()
        .filter_map(|item| {
            let product = *products.get(&item.product_uuid)?;
            let unit_price = effective_unit_price(product);

            Some(EnrichedCartLine {
                unit_price,
                line_total: unit_price.saturating_mul(u64::from(item.quantity)),
                availability: LineAvailability::of(product, item.quantity),
                product: product.clone(),
                item,
            })
        })
        .collect();

    let subtotal = lines
        .iter()
        .fold(0_u64, |total, line| total.saturating_add(line.line_total));

    EnrichedCart { lines, subtotal }
}

/// Join wishlist entries with their products.
#[must_use]
pub fn enrich_wishlist(
    entries: Vec<WishlistItemRecord>,
    products: &[ProductRecord],
) -> Vec<EnrichedWishlistItem> {
    let products = live_products(products);

    entries
        .into_iter()
        .filter_map(|item| {
            let product = (*products.get(&item.product_uuid)?).clone();

            Some(EnrichedWishlistItem { item, product })
        })
        .collect()
}
