//! In-memory storage backend.
//!
//! Every table lives behind a single lock. Services take the write lock for
//! the whole of each mutation, so read-modify-write sequences are atomic.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    domain::{
        carts::records::CartItemRecord, products::records::ProductRecord,
        products::records::ProductUuid, reviews::records::ReviewRecord,
        wishlists::records::WishlistItemRecord,
    },
    sessions::SessionId,
};

pub(crate) type SessionKey = (SessionId, ProductUuid);

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) products: FxHashMap<ProductUuid, ProductRecord>,
    pub(crate) cart_items: FxHashMap<SessionKey, CartItemRecord>,
    pub(crate) wishlist_items: FxHashMap<SessionKey, WishlistItemRecord>,
    pub(crate) reviews: Vec<ReviewRecord>,
}

impl Tables {
    /// A product that has not been soft-deleted.
    pub(crate) fn live_product(&self, product: ProductUuid) -> Option<&ProductRecord> {
        self.products
            .get(&product)
            .filter(|record| record.deleted_at.is_none())
    }
}

/// Shared handle to the in-memory tables. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
