//! Cart Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{encode, try_get_count},
    domain::{
        carts::records::{CartItemRecord, CartItemUuid},
        products::records::ProductUuid,
    },
    sessions::SessionId,
};

const LIST_CART_ITEMS_SQL: &str = include_str!("sql/list_cart_items.sql");
const ADD_CART_ITEM_SQL: &str = include_str!("sql/add_cart_item.sql");
const SET_CART_ITEM_QUANTITY_SQL: &str = include_str!("sql/set_cart_item_quantity.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("sql/delete_cart_item.sql");
const CLEAR_CART_ITEMS_SQL: &str = include_str!("sql/clear_cart_items.sql");

/// Line attributes written by an add.
pub(crate) struct CartLine {
    pub(crate) uuid: CartItemUuid,
    pub(crate) product_uuid: ProductUuid,
    pub(crate) units: u32,
    pub(crate) selected_size: Option<String>,
    pub(crate) selected_frame: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: &SessionId,
    ) -> Result<Vec<CartItemRecord>, sqlx::Error> {
        query_as::<Postgres, CartItemRecord>(LIST_CART_ITEMS_SQL)
            .bind(session.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert a line holding at least one unit, or add `units` to the existing
    /// line for the same product.
    pub(crate) async fn add_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: &SessionId,
        line: CartLine,
    ) -> Result<CartItemRecord, sqlx::Error> {
        let units: i32 = encode(line.units, "quantity")?;

        query_as::<Postgres, CartItemRecord>(ADD_CART_ITEM_SQL)
            .bind(line.uuid.into_uuid())
            .bind(session.as_str())
            .bind(line.product_uuid.into_uuid())
            .bind(units)
            .bind(line.selected_size)
            .bind(line.selected_frame)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: &SessionId,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Option<CartItemRecord>, sqlx::Error> {
        let quantity: i32 = encode(quantity, "quantity")?;

        query_as::<Postgres, CartItemRecord>(SET_CART_ITEM_QUANTITY_SQL)
            .bind(session.as_str())
            .bind(product.into_uuid())
            .bind(quantity)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: &SessionId,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(session.as_str())
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn clear(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        session: &SessionId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_CART_ITEMS_SQL)
            .bind(session.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartItemUuid::from_uuid(row.try_get("uuid")?),
            session: SessionId::new(row.try_get::<String, _>("session_id")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            quantity: try_get_count(row, "quantity")?,
            selected_size: row.try_get("selected_size")?,
            selected_frame: row.try_get("selected_frame")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
