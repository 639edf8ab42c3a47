//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{NewCartItem, line_quantity},
            errors::CartsServiceError,
            records::{CartItemRecord, CartItemUuid},
            repository::{CartLine, PgCartItemsRepository},
        },
        products::records::ProductUuid,
    },
    sessions::SessionId,
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    items: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn list_items(
        &self,
        session: SessionId,
    ) -> Result<Vec<CartItemRecord>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.items.list_items(&mut tx, &session).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn add_item(
        &self,
        session: SessionId,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError> {
        let units = item.units()?;

        let mut tx = self.db.begin().await?;

        let line = self
            .items
            .add_item(
                &mut tx,
                &session,
                CartLine {
                    uuid: CartItemUuid::new(),
                    product_uuid: item.product_uuid,
                    units,
                    selected_size: item.selected_size,
                    selected_frame: item.selected_frame,
                },
            )
            .await?;

        tx.commit().await?;

        Ok(line)
    }

    async fn set_quantity(
        &self,
        session: SessionId,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Option<CartItemRecord>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        if quantity <= 0 {
            self.items.delete_item(&mut tx, &session, product).await?;

            tx.commit().await?;

            return Ok(None);
        }

        let quantity = line_quantity(quantity)?;

        let line = self
            .items
            .set_quantity(&mut tx, &session, product, quantity)
            .await?
            .ok_or(CartsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(Some(line))
    }

    async fn remove_item(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<bool, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.items.delete_item(&mut tx, &session, product).await?;

        tx.commit().await?;

        Ok(rows_affected > 0)
    }

    async fn clear(&self, session: SessionId) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.items.clear(&mut tx, &session).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// All lines in a session's cart, including lines whose product has since
    /// been deleted.
    async fn list_items(
        &self,
        session: SessionId,
    ) -> Result<Vec<CartItemRecord>, CartsServiceError>;

    /// Add units of a product, merging into the existing line when there is one.
    async fn add_item(
        &self,
        session: SessionId,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Set the absolute quantity of a line. Zero or less removes the line and
    /// returns `None`.
    async fn set_quantity(
        &self,
        session: SessionId,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Option<CartItemRecord>, CartsServiceError>;

    /// Remove a line, returning whether one was removed.
    async fn remove_item(
        &self,
        session: SessionId,
        product: ProductUuid,
    ) -> Result<bool, CartsServiceError>;

    /// Remove every line in the session, returning how many were removed.
    async fn clear(&self, session: SessionId) -> Result<u64, CartsServiceError>;
}
