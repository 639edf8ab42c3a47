//! Test Helpers

use crate::{
    domain::{
        carts::{
            CartsService, CartsServiceError, data::NewCartItem, records::CartItemRecord,
        },
        products::{
            ProductsService, ProductsServiceError,
            data::{NewProduct, ProductFields},
            records::{ProductDetails, ProductRecord, ProductUuid},
        },
        reviews::data::NewReview,
    },
    sessions::SessionId,
    test::TestContext,
};

pub(crate) fn painting_fields(sku: &str, price: u64) -> ProductFields {
    ProductFields {
        sku: sku.to_string(),
        title: format!("Painting {sku}"),
        description: None,
        image_url: None,
        category: Some("landscape".to_string()),
        price,
        sale_price: None,
        details: ProductDetails::Painting {
            sold: false,
            medium: Some("oil on canvas".to_string()),
        },
    }
}

pub(crate) async fn create_painting(
    ctx: &TestContext,
    sku: &str,
    price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            fields: painting_fields(sku, price),
        })
        .await
}

pub(crate) async fn create_gift(
    ctx: &TestContext,
    sku: &str,
    price: u64,
    min_quantity: u32,
    max_quantity: Option<u32>,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            fields: ProductFields {
                title: format!("Gift {sku}"),
                category: Some("stationery".to_string()),
                details: ProductDetails::CorporateGift {
                    min_quantity,
                    max_quantity,
                },
                ..painting_fields(sku, price)
            },
        })
        .await
}

pub(crate) fn new_cart_item(product: ProductUuid, quantity: Option<i64>) -> NewCartItem {
    NewCartItem {
        product_uuid: product,
        quantity,
        selected_size: None,
        selected_frame: None,
    }
}

pub(crate) async fn add_to_cart(
    ctx: &TestContext,
    session: &SessionId,
    product: ProductUuid,
    quantity: Option<i64>,
) -> Result<CartItemRecord, CartsServiceError> {
    ctx.carts
        .add_item(session.clone(), new_cart_item(product, quantity))
        .await
}

pub(crate) fn new_review(customer_name: &str, rating: i64) -> NewReview {
    NewReview {
        customer_name: customer_name.to_string(),
        rating,
        comment: Some("Beautiful work".to_string()),
    }
}
