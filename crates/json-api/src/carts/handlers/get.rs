//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::{
    domain::pricing::{EnrichedCart, EnrichedCartLine, LineAvailability, enrich_cart},
    sessions::SessionId,
};

use crate::{
    carts::errors::into_status_error, extensions::*, products::schemas::ProductResponse,
    state::State,
};

/// Whether a line could be purchased as it stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum AvailabilityParam {
    Available,

    /// The painting has been sold
    Sold,

    /// Fewer units than the gift's minimum order quantity
    BelowMinimum,

    /// More units than the gift's maximum order quantity
    AboveMaximum,
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The unique identifier of the cart line
    pub uuid: Uuid,

    pub product_uuid: Uuid,
    pub quantity: u32,
    pub selected_size: Option<String>,
    pub selected_frame: Option<String>,

    /// Current price of one unit in pence/cents
    pub unit_price: u64,

    /// Unit price multiplied by quantity
    pub line_total: u64,

    pub availability: AvailabilityParam,

    /// The bound that was crossed, for gift quantity problems
    pub quantity_limit: Option<u32>,

    pub product: ProductResponse,
}

impl From<EnrichedCartLine> for CartLineResponse {
    fn from(line: EnrichedCartLine) -> Self {
        let (availability, quantity_limit) = match line.availability {
            LineAvailability::Available => (AvailabilityParam::Available, None),
            LineAvailability::Sold => (AvailabilityParam::Sold, None),
            LineAvailability::BelowMinimum { min } => (AvailabilityParam::BelowMinimum, Some(min)),
            LineAvailability::AboveMaximum { max } => (AvailabilityParam::AboveMaximum, Some(max)),
        };

        Self {
            uuid: line.item.uuid.into(),
            product_uuid: line.item.product_uuid.into(),
            quantity: line.item.quantity,
            selected_size: line.item.selected_size,
            selected_frame: line.item.selected_frame,
            unit_price: line.unit_price,
            line_total: line.line_total,
            availability,
            quantity_limit,
            product: line.product.into(),
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub session: String,

    /// Lines whose product is still in the catalog
    pub items: Vec<CartLineResponse>,

    /// Total number of units across all lines
    pub item_count: u64,

    /// Sum of all line totals in pence/cents
    pub subtotal: u64,
}

impl CartResponse {
    fn new(session: SessionId, cart: EnrichedCart) -> Self {
        let item_count = cart
            .lines
            .iter()
            .fold(0_u64, |count, line| count.saturating_add(u64::from(line.item.quantity)));

        Self {
            session: session.into_inner(),
            items: cart.lines.into_iter().map(Into::into).collect(),
            item_count,
            subtotal: cart.subtotal,
        }
    }
}

/// Get Cart Handler
///
/// Returns the session's cart priced against the current catalog.
#[endpoint(tags("carts"), summary = "Get Cart")]
pub(crate) async fn handler(
    session: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = SessionId::from(session.into_inner());

    let lines = state
        .app
        .carts
        .list_items(session.clone())
        .await
        .map_err(into_status_error)?;

    let products = state
        .app
        .products
        .get_products(lines.iter().map(|line| line.product_uuid).collect())
        .await
        .or_500("failed to load cart products")?;

    Ok(Json(CartResponse::new(session, enrich_cart(lines, &products))))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use atelier_app::domain::{
        carts::{CartsServiceError, MockCartsService},
        products::{MockProductsService, records::ProductUuid},
    };

    use crate::test_helpers::{
        Mocks, TEST_SESSION, make_cart_item, make_gift, make_painting, storage_error,
    };

    use super::*;

    fn make_service(carts: MockCartsService, products: MockProductsService) -> Service {
        Mocks {
            carts,
            products,
            ..Mocks::default()
        }
        .service(Router::with_path("sessions/{session}/cart").get(handler))
    }

    #[tokio::test]
    async fn test_get_cart_prices_lines_and_subtotal() -> TestResult {
        let painting = ProductUuid::new();
        let gift = ProductUuid::new();
        let orphan = ProductUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_list_items()
            .once()
            .withf(|session| session.as_str() == TEST_SESSION)
            .return_once(move |_| {
                Ok(vec![
                    make_cart_item(painting, 1),
                    make_cart_item(gift, 5),
                    make_cart_item(orphan, 2),
                ])
            });

        let mut products = MockProductsService::new();

        products
            .expect_get_products()
            .once()
            .withf(move |uuids| *uuids == vec![painting, gift, orphan])
            .return_once(move |_| {
                let mut on_sale = make_painting(painting, 300);

                on_sale.sale_price = Some(240);

                Ok(vec![on_sale, make_gift(gift, 100, 10, None)])
            });

        let cart: CartResponse = TestClient::get("http://example.com/sessions/abc/cart")
            .send(&make_service(carts, products))
            .await
            .take_json()
            .await?;

        assert_eq!(cart.session, TEST_SESSION);
        assert_eq!(cart.items.len(), 2, "orphaned line should be dropped");
        assert_eq!(cart.items[0].unit_price, 240);
        assert_eq!(cart.items[0].availability, AvailabilityParam::Available);
        assert_eq!(cart.items[1].line_total, 500);
        assert_eq!(cart.items[1].availability, AvailabilityParam::BelowMinimum);
        assert_eq!(cart.items[1].quantity_limit, Some(10));
        assert_eq!(cart.item_count, 6);
        assert_eq!(cart.subtotal, 740);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_empty_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_items()
            .once()
            .return_once(|_| Ok(vec![]));

        let mut products = MockProductsService::new();

        products
            .expect_get_products()
            .once()
            .withf(Vec::is_empty)
            .return_once(|_| Ok(vec![]));

        let cart: CartResponse = TestClient::get("http://example.com/sessions/new-visitor/cart")
            .send(&make_service(carts, products))
            .await
            .take_json()
            .await?;

        assert_eq!(cart.session, "new-visitor");
        assert!(cart.items.is_empty());
        assert_eq!(cart.subtotal, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_cart_storage_error_returns_500() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_items()
            .once()
            .return_once(|_| Err(CartsServiceError::Sql(storage_error())));

        let res = TestClient::get("http://example.com/sessions/abc/cart")
            .send(&make_service(carts, MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
