//! Wishlists service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::records::ProductUuid,
        wishlists::{
            errors::WishlistsServiceError,
            records::{WishlistItemRecord, WishlistItemUuid},
            repository::PgWishlistItemsRepository,
        },
    },
    sessions::SessionId,
};

#[derive(Debug, Clone)]
pub struct PgWishlistsService {
    db: Db,
    items: PgWishlistItemsRepository,
}

impl PgWishlistsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items: PgWishlistItemsRepository::new(),
        }
    }
}

#[async_trait]
impl WishlistsService for PgWishlistsService {
    async fn contains(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<bool, WishlistsServiceError> {
        let mut tx = self.db.begin().await?;

        let contains = self.items.contains(&mut tx, &session, product).await?;

        tx.commit().await?;

        Ok(contains)
    }

    async fn list_items(
        &self,
        session: SessionId,
    ) -> Result<Vec<WishlistItemRecord>, WishlistsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.items.list_items(&mut tx, &session).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn add_item(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<WishlistItemRecord, WishlistsServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self
            .items
            .add_item(&mut tx, &session, WishlistItemUuid::new(), product)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn remove_item(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<bool, WishlistsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.items.delete_item(&mut tx, &session, product).await?;

        tx.commit().await?;

        Ok(rows_affected > 0)
    }
}

#[automock]
#[async_trait]
pub trait WishlistsService: Send + Sync {
    /// Whether the session has saved the product.
    async fn contains(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<bool, WishlistsServiceError>;

    /// All saved entries for a session, oldest first.
    async fn list_items(
        &self,
        session: SessionId,
    ) -> Result<Vec<WishlistItemRecord>, WishlistsServiceError>;

    /// Save a product. Saving it again returns the existing entry.
    async fn add_item(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<WishlistItemRecord, WishlistsServiceError>;

    /// Remove a saved product, returning whether an entry was removed.
    async fn remove_item(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<bool, WishlistsServiceError>;
}
