//! Products Data

use crate::domain::products::{
    errors::ProductValidationError,
    records::{ProductDetails, ProductUuid},
};

/// Admin-owned product attributes, used for both creation and updates.
///
/// Rating aggregates are deliberately absent: only review submission writes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub sku: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub price: u64,
    pub sale_price: Option<u64>,
    pub details: ProductDetails,
}

impl ProductFields {
    /// Check the invariants the store relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.sku.trim().is_empty() {
            return Err(ProductValidationError::BlankSku);
        }

        if self.title.trim().is_empty() {
            return Err(ProductValidationError::BlankTitle);
        }

        if self.price == 0 {
            return Err(ProductValidationError::ZeroPrice);
        }

        if self.sale_price == Some(0) {
            return Err(ProductValidationError::ZeroSalePrice);
        }

        let amounts_fit = i64::try_from(self.price).is_ok()
            && self.sale_price.is_none_or(|sale| i64::try_from(sale).is_ok());

        if !amounts_fit {
            return Err(ProductValidationError::AmountOutOfRange);
        }

        if let ProductDetails::CorporateGift {
            min_quantity,
            max_quantity,
        } = self.details
        {
            if min_quantity == 0 {
                return Err(ProductValidationError::ZeroMinimumQuantity);
            }

            if max_quantity.is_some_and(|max| max < min_quantity) {
                return Err(ProductValidationError::InvertedQuantityBounds);
            }

            let bounds_fit = i32::try_from(min_quantity).is_ok()
                && max_quantity.is_none_or(|max| i32::try_from(max).is_ok());

            if !bounds_fit {
                return Err(ProductValidationError::AmountOutOfRange);
            }
        }

        Ok(())
    }
}

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub fields: ProductFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painting() -> ProductFields {
        ProductFields {
            sku: "PNT-001".to_string(),
            title: "Harbour at Dusk".to_string(),
            description: None,
            image_url: None,
            category: Some("landscape".to_string()),
            price: 120_000,
            sale_price: None,
            details: ProductDetails::Painting {
                sold: false,
                medium: Some("oil on canvas".to_string()),
            },
        }
    }

    fn gift(min_quantity: u32, max_quantity: Option<u32>) -> ProductFields {
        ProductFields {
            sku: "GFT-001".to_string(),
            title: "Engraved Pen Set".to_string(),
            details: ProductDetails::CorporateGift {
                min_quantity,
                max_quantity,
            },
            ..painting()
        }
    }

    #[test]
    fn valid_products_pass() {
        assert_eq!(painting().validate(), Ok(()));
        assert_eq!(gift(10, Some(500)).validate(), Ok(()));
        assert_eq!(gift(1, None).validate(), Ok(()));
    }

    #[test]
    fn blank_identity_fields_are_rejected() {
        let blank_sku = ProductFields {
            sku: "  ".to_string(),
            ..painting()
        };
        let blank_title = ProductFields {
            title: String::new(),
            ..painting()
        };

        assert_eq!(blank_sku.validate(), Err(ProductValidationError::BlankSku));
        assert_eq!(
            blank_title.validate(),
            Err(ProductValidationError::BlankTitle)
        );
    }

    #[test]
    fn prices_must_be_positive() {
        let zero_price = ProductFields {
            price: 0,
            ..painting()
        };
        let zero_sale = ProductFields {
            sale_price: Some(0),
            ..painting()
        };

        assert_eq!(zero_price.validate(), Err(ProductValidationError::ZeroPrice));
        assert_eq!(
            zero_sale.validate(),
            Err(ProductValidationError::ZeroSalePrice)
        );
    }

    #[test]
    fn sale_price_above_base_price_is_accepted() {
        let fields = ProductFields {
            sale_price: Some(200_000),
            ..painting()
        };

        assert_eq!(fields.validate(), Ok(()));
    }

    #[test]
    fn oversized_amounts_are_rejected() {
        let fields = ProductFields {
            price: u64::MAX,
            ..painting()
        };

        assert_eq!(
            fields.validate(),
            Err(ProductValidationError::AmountOutOfRange)
        );
    }

    #[test]
    fn gift_bounds_are_checked() {
        assert_eq!(
            gift(0, None).validate(),
            Err(ProductValidationError::ZeroMinimumQuantity)
        );
        assert_eq!(
            gift(50, Some(10)).validate(),
            Err(ProductValidationError::InvertedQuantityBounds)
        );
    }
}
