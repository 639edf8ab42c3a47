//! Product Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::Serialize;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// The two kinds of sellable item in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Painting,
    CorporateGift,
}

impl ProductKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Painting => "painting",
            Self::CorporateGift => "corporate_gift",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown product kind: {0}")]
pub struct UnknownProductKind(pub String);

impl FromStr for ProductKind {
    type Err = UnknownProductKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "painting" => Ok(Self::Painting),
            "corporate_gift" => Ok(Self::CorporateGift),
            other => Err(UnknownProductKind(other.to_string())),
        }
    }
}

/// Kind-specific attributes.
///
/// Paintings are one-of-a-kind and become unpurchasable once sold. Corporate
/// gifts are sold in bulk between a minimum and an optional maximum quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductDetails {
    Painting {
        sold: bool,
        medium: Option<String>,
    },
    CorporateGift {
        min_quantity: u32,
        max_quantity: Option<u32>,
    },
}

impl ProductDetails {
    #[must_use]
    pub const fn kind(&self) -> ProductKind {
        match self {
            Self::Painting { .. } => ProductKind::Painting,
            Self::CorporateGift { .. } => ProductKind::CorporateGift,
        }
    }
}

/// Product Record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub sku: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,

    /// Base price in minor currency units.
    pub price: u64,

    /// Sale price in minor currency units; overrides `price` when present.
    pub sale_price: Option<u64>,

    pub details: ProductDetails,

    /// Mean of all review ratings, `0.0` when unreviewed.
    pub average_rating: f64,
    pub total_reviews: u64,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl ProductRecord {
    #[must_use]
    pub const fn kind(&self) -> ProductKind {
        self.details.kind()
    }
}
