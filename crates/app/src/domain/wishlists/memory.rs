//! In-memory wishlists service.

use async_trait::async_trait;
use jiff::Timestamp;

use crate::{
    domain::{
        products::records::ProductUuid,
        wishlists::{
            errors::WishlistsServiceError,
            records::{WishlistItemRecord, WishlistItemUuid},
            service::WishlistsService,
        },
    },
    memory::MemoryStore,
    sessions::SessionId,
};

#[derive(Debug, Clone)]
pub struct MemoryWishlistsService {
    store: MemoryStore,
}

impl MemoryWishlistsService {
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WishlistsService for MemoryWishlistsService {
    async fn contains(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<bool, WishlistsServiceError> {
        let tables = self.store.read().await;

        Ok(tables.wishlist_items.contains_key(&(session, product)))
    }

    async fn list_items(
        &self,
        session: SessionId,
    ) -> Result<Vec<WishlistItemRecord>, WishlistsServiceError> {
        let tables = self.store.read().await;

        let mut items: Vec<WishlistItemRecord> = tables
            .wishlist_items
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
        product: ProductUuid,
    ) -> Result<WishlistItemRecord, WishlistsServiceError> {
        let mut tables = self.store.write().await;

        let item = tables
            .wishlist_items
            .entry((session.clone(), product))
            .or_insert_with(|| WishlistItemRecord {
                uuid: WishlistItemUuid::new(),
                session,
                product_uuid: product,
                created_at: Timestamp::now(),
            });

        Ok(item.clone())
    }

    async fn remove_item(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<bool, WishlistsServiceError> {
        let mut tables = self.store.write().await;

        Ok(tables.wishlist_items.remove(&(session, product)).is_some())
    }
}
