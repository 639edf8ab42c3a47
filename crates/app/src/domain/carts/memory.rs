//! In-memory carts service.

use async_trait::async_trait;
use jiff::Timestamp;

use crate::{
    domain::{
        carts::{
            data::{NewCartItem, initial_quantity, line_quantity, merged_quantity},
            errors::CartsServiceError,
            records::{CartItemRecord, CartItemUuid},
            service::CartsService,
        },
        products::records::ProductUuid,
    },
    memory::MemoryStore,
    sessions::SessionId,
};

#[derive(Debug, Clone)]
pub struct MemoryCartsService {
    store: MemoryStore,
}

impl MemoryCartsService {
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartsService for MemoryCartsService {
    async fn list_items(
        &self,
        session: SessionId,
    ) -> Result<Vec<CartItemRecord>, CartsServiceError> {
        let tables = self.store.read().await;

        let mut items: Vec<CartItemRecord> = tables
            .cart_items
            .values()
            .filter(|item| item.session == session)
            .cloned()
            .collect();

        items.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.uuid.cmp(&b.uuid))
        });

        Ok(items)
    }

    async fn add_item(
        &self,
        session: SessionId,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let units = item.units()?;

        let mut tables = self.store.write().await;
        let now = Timestamp::now();

        let key = (session, item.product_uuid);

        if let Some(line) = tables.cart_items.get_mut(&key) {
            line.quantity = merged_quantity(line.quantity, units)?;

            if item.selected_size.is_some() {
                line.selected_size = item.selected_size;
            }

            if item.selected_frame.is_some() {
                line.selected_frame = item.selected_frame;
            }

            line.updated_at = now;

            return Ok(line.clone());
        }

        let line = CartItemRecord {
            uuid: CartItemUuid::new(),
            session: key.0.clone(),
            product_uuid: item.product_uuid,
            quantity: initial_quantity(units),
            selected_size: item.selected_size,
            selected_frame: item.selected_frame,
            created_at: now,
            updated_at: now,
        };

        tables.cart_items.insert(key, line.clone());

        Ok(line)
    }

    async fn set_quantity(
        &self,
        session: SessionId,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Option<CartItemRecord>, CartsServiceError> {
        let mut tables = self.store.write().await;
        let key = (session, product);

        if quantity <= 0 {
            tables.cart_items.remove(&key);

            return Ok(None);
        }

        let quantity = line_quantity(quantity)?;

        let line = tables
            .cart_items
            .get_mut(&key)
            .ok_or(CartsServiceError::NotFound)?;

        line.quantity = quantity;
        line.updated_at = Timestamp::now();

        Ok(Some(line.clone()))
    }

    async fn remove_item(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<bool, CartsServiceError> {
        let mut tables = self.store.write().await;

        Ok(tables.cart_items.remove(&(session, product)).is_some())
    }

    async fn clear(&self, session: SessionId) -> Result<u64, CartsServiceError> {
        let mut tables = self.store.write().await;
        let before = tables.cart_items.len();

        tables.cart_items.retain(|(owner, _), _| *owner != session);

        Ok(u64::try_from(before - tables.cart_items.len()).unwrap_or(u64::MAX))
    }
}
