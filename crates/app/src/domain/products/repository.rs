//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    database::{
        encode, try_get_amount, try_get_count, try_get_optional_amount, try_get_optional_count,
    },
    domain::products::{
        data::ProductFields,
        records::{ProductDetails, ProductKind, ProductRecord, ProductUuid},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const GET_PRODUCTS_SQL: &str = include_str!("sql/get_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        kind: Option<ProductKind>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(kind.map(ProductKind::as_str))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let uuids: Vec<Uuid> = products.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, ProductRecord>(GET_PRODUCTS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        fields: ProductFields,
    ) -> Result<ProductRecord, sqlx::Error> {
        let columns = ProductColumns::try_from(fields)?;

        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(columns.sku)
            .bind(columns.kind)
            .bind(columns.title)
            .bind(columns.description)
            .bind(columns.image_url)
            .bind(columns.category)
            .bind(columns.price)
            .bind(columns.sale_price)
            .bind(columns.sold)
            .bind(columns.medium)
            .bind(columns.min_quantity)
            .bind(columns.max_quantity)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        fields: ProductFields,
    ) -> Result<ProductRecord, sqlx::Error> {
        let columns = ProductColumns::try_from(fields)?;

        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(columns.sku)
            .bind(columns.kind)
            .bind(columns.title)
            .bind(columns.description)
            .bind(columns.image_url)
            .bind(columns.category)
            .bind(columns.price)
            .bind(columns.sale_price)
            .bind(columns.sold)
            .bind(columns.medium)
            .bind(columns.min_quantity)
            .bind(columns.max_quantity)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

/// Product fields flattened into their column representation.
struct ProductColumns {
    sku: String,
    kind: &'static str,
    title: String,
    description: Option<String>,
    image_url: Option<String>,
    category: Option<String>,
    price: i64,
    sale_price: Option<i64>,
    sold: bool,
    medium: Option<String>,
    min_quantity: Option<i32>,
    max_quantity: Option<i32>,
}

impl TryFrom<ProductFields> for ProductColumns {
    type Error = sqlx::Error;

    fn try_from(fields: ProductFields) -> Result<Self, Self::Error> {
        let kind = fields.details.kind().as_str();

        let (sold, medium, min_quantity, max_quantity) = match fields.details {
            ProductDetails::Painting { sold, medium } => (sold, medium, None, None),
            ProductDetails::CorporateGift {
                min_quantity,
                max_quantity,
            } => (
                false,
                None,
                Some(encode(min_quantity, "min_quantity")?),
                max_quantity
                    .map(|max| encode(max, "max_quantity"))
                    .transpose()?,
            ),
        };

        Ok(Self {
            sku: fields.sku,
            kind,
            title: fields.title,
            description: fields.description,
            image_url: fields.image_url,
            category: fields.category,
            price: encode(fields.price, "price")?,
            sale_price: fields
                .sale_price
                .map(|sale| encode(sale, "sale_price"))
                .transpose()?,
            sold,
            medium,
            min_quantity,
            max_quantity,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("kind")?;

        let details = match kind.parse::<ProductKind>() {
            Ok(ProductKind::Painting) => ProductDetails::Painting {
                sold: row.try_get("sold")?,
                medium: row.try_get("medium")?,
            },
            Ok(ProductKind::CorporateGift) => ProductDetails::CorporateGift {
                min_quantity: try_get_count(row, "min_quantity")?,
                max_quantity: try_get_optional_count(row, "max_quantity")?,
            },
            Err(source) => {
                return Err(sqlx::Error::ColumnDecode {
                    index: "kind".to_string(),
                    source: Box::new(source),
                });
            }
        };

        let total_reviews: i64 = row.try_get("total_reviews")?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            sku: row.try_get("sku")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            image_url: row.try_get("image_url")?,
            category: row.try_get("category")?,
            price: try_get_amount(row, "price")?,
            sale_price: try_get_optional_amount(row, "sale_price")?,
            details,
            average_rating: row.try_get("average_rating")?,
            total_reviews: encode(total_reviews, "total_reviews")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
