//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use atelier_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartItemRecord, CartItemUuid},
        },
        products::{
            MockProductsService,
            records::{ProductDetails, ProductRecord, ProductUuid},
        },
        reviews::{
            MockReviewsService,
            records::{Rating, ReviewRecord, ReviewUuid},
        },
        wishlists::{
            MockWishlistsService,
            records::{WishlistItemRecord, WishlistItemUuid},
        },
    },
    sessions::SessionId,
};

use crate::state::State;

pub(crate) const TEST_SESSION: &str = "abc";

/// Service mocks behind a test router. Any mock left at its default rejects
/// every call.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) products: MockProductsService,
    pub(crate) carts: MockCartsService,
    pub(crate) wishlists: MockWishlistsService,
    pub(crate) reviews: MockReviewsService,
    pub(crate) auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            wishlists: Arc::new(self.wishlists),
            reviews: Arc::new(self.reviews),
            auth: Arc::new(self.auth),
        })
    }

    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Mocks {
        auth,
        ..Mocks::default()
    }
    .into_state()
}

/// A storage failure, for exercising 500 responses.
pub(crate) fn storage_error() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

pub(crate) fn test_session() -> SessionId {
    SessionId::from(TEST_SESSION)
}

pub(crate) fn make_painting(uuid: ProductUuid, price: u64) -> ProductRecord {
    ProductRecord {
        uuid,
        sku: format!("PNT-{price}"),
        title: "Harbour at Dusk".to_string(),
        description: None,
        image_url: None,
        category: Some("landscape".to_string()),
        price,
        sale_price: None,
        details: ProductDetails::Painting {
            sold: false,
            medium: Some("oil on canvas".to_string()),
        },
        average_rating: 0.0,
        total_reviews: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_gift(
    uuid: ProductUuid,
    price: u64,
    min_quantity: u32,
    max_quantity: Option<u32>,
) -> ProductRecord {
    ProductRecord {
        sku: format!("GFT-{price}"),
        title: "Engraved Pen Set".to_string(),
        details: ProductDetails::CorporateGift {
            min_quantity,
            max_quantity,
        },
        ..make_painting(uuid, price)
    }
}

pub(crate) fn make_cart_item(product: ProductUuid, quantity: u32) -> CartItemRecord {
    CartItemRecord {
        uuid: CartItemUuid::new(),
        session: test_session(),
        product_uuid: product,
        quantity,
        selected_size: None,
        selected_frame: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_wishlist_item(product: ProductUuid) -> WishlistItemRecord {
    WishlistItemRecord {
        uuid: WishlistItemUuid::new(),
        session: test_session(),
        product_uuid: product,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_review(product: ProductUuid, rating: Rating) -> ReviewRecord {
    ReviewRecord {
        uuid: ReviewUuid::new(),
        product_uuid: product,
        customer_name: "Ada".to_string(),
        rating,
        comment: Some("Beautiful work".to_string()),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
