//! Product request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use atelier_app::domain::{
    pricing::effective_unit_price,
    products::{
        data::ProductFields,
        records::{ProductDetails, ProductKind, ProductRecord},
    },
};

/// Product kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ProductKindParam {
    /// One-of-a-kind artwork
    Painting,

    /// Item sold in bulk quantities
    CorporateGift,
}

impl From<ProductKindParam> for ProductKind {
    fn from(kind: ProductKindParam) -> Self {
        match kind {
            ProductKindParam::Painting => ProductKind::Painting,
            ProductKindParam::CorporateGift => ProductKind::CorporateGift,
        }
    }
}

impl From<ProductKind> for ProductKindParam {
    fn from(kind: ProductKind) -> Self {
        match kind {
            ProductKind::Painting => ProductKindParam::Painting,
            ProductKind::CorporateGift => ProductKindParam::CorporateGift,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// Stock keeping unit
    pub sku: String,

    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,

    /// The base price of the product in pence/cents
    pub price: u64,

    /// The sale price of the product in pence/cents, if discounted
    pub sale_price: Option<u64>,

    /// The price a customer pays for one unit
    pub effective_price: u64,

    pub kind: ProductKindParam,

    /// Whether a painting has been sold
    pub sold: Option<bool>,

    /// Painting medium
    pub medium: Option<String>,

    /// Smallest order quantity of a corporate gift
    pub min_quantity: Option<u32>,

    /// Largest order quantity of a corporate gift
    pub max_quantity: Option<u32>,

    /// Mean review rating, 0 when unreviewed
    pub average_rating: f64,

    pub total_reviews: u64,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        let effective_price = effective_unit_price(&product);
        let kind = product.kind().into();

        let (sold, medium, min_quantity, max_quantity) = match product.details {
            ProductDetails::Painting { sold, medium } => (Some(sold), medium, None, None),
            ProductDetails::CorporateGift {
                min_quantity,
                max_quantity,
            } => (None, None, Some(min_quantity), max_quantity),
        };

        ProductResponse {
            uuid: product.uuid.into(),
            sku: product.sku,
            title: product.title,
            description: product.description,
            image_url: product.image_url,
            category: product.category,
            price: product.price,
            sale_price: product.sale_price,
            effective_price,
            kind,
            sold,
            medium,
            min_quantity,
            max_quantity,
            average_rating: product.average_rating,
            total_reviews: product.total_reviews,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Admin-owned product attributes, used to create and replace products.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    pub sku: String,
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    /// The base price in pence/cents
    pub price: u64,

    /// Optional sale price in pence/cents
    #[serde(default)]
    pub sale_price: Option<u64>,

    pub kind: ProductKindParam,

    /// Paintings only. Defaults to unsold.
    #[serde(default)]
    pub sold: Option<bool>,

    /// Paintings only.
    #[serde(default)]
    pub medium: Option<String>,

    /// Corporate gifts only. Defaults to one.
    #[serde(default)]
    pub min_quantity: Option<u32>,

    /// Corporate gifts only. Unbounded when absent.
    #[serde(default)]
    pub max_quantity: Option<u32>,
}

/// A request mixing attributes of both product kinds.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ProductRequestError {
    #[error("quantity bounds only apply to corporate gifts")]
    QuantityBoundsOnPainting,

    #[error("sold and medium only apply to paintings")]
    PaintingFieldsOnGift,
}

impl TryFrom<ProductRequest> for ProductFields {
    type Error = ProductRequestError;

    fn try_from(request: ProductRequest) -> Result<Self, Self::Error> {
        let details = match request.kind {
            ProductKindParam::Painting => {
                if request.min_quantity.is_some() || request.max_quantity.is_some() {
                    return Err(ProductRequestError::QuantityBoundsOnPainting);
                }

                ProductDetails::Painting {
                    sold: request.sold.unwrap_or(false),
                    medium: request.medium,
                }
            }
            ProductKindParam::CorporateGift => {
                if request.sold.is_some() || request.medium.is_some() {
                    return Err(ProductRequestError::PaintingFieldsOnGift);
                }

                ProductDetails::CorporateGift {
                    min_quantity: request.min_quantity.unwrap_or(1),
                    max_quantity: request.max_quantity,
                }
            }
        };

        Ok(ProductFields {
            sku: request.sku,
            title: request.title,
            description: request.description,
            image_url: request.image_url,
            category: request.category,
            price: request.price,
            sale_price: request.sale_price,
            details,
        })
    }
}
