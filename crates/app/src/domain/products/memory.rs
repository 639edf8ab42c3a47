//! In-memory products service.

use async_trait::async_trait;
use jiff::Timestamp;

use crate::{
    domain::products::{
        data::{NewProduct, ProductFields},
        errors::ProductsServiceError,
        records::{ProductKind, ProductRecord, ProductUuid},
        service::ProductsService,
    },
    memory::{MemoryStore, Tables},
};

#[derive(Debug, Clone)]
pub struct MemoryProductsService {
    store: MemoryStore,
}

impl MemoryProductsService {
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

fn sku_taken(tables: &Tables, sku: &str, except: Option<ProductUuid>) -> bool {
    tables.products.values().any(|product| {
        product.deleted_at.is_none() && product.sku == sku && Some(product.uuid) != except
    })
}

fn sorted(mut products: Vec<ProductRecord>) -> Vec<ProductRecord> {
    products.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.uuid.cmp(&b.uuid))
    });

    products
}

#[async_trait]
impl ProductsService for MemoryProductsService {
    async fn list_products(
        &self,
        kind: Option<ProductKind>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let tables = self.store.read().await;

        let products = tables
            .products
            .values()
            .filter(|product| product.deleted_at.is_none())
            .filter(|product| kind.is_none_or(|kind| product.kind() == kind))
            .cloned()
            .collect();

        Ok(sorted(products))
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let tables = self.store.read().await;

        tables
            .live_product(product)
            .cloned()
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn get_products(
        &self,
        products: Vec<ProductUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let tables = self.store.read().await;

        let mut found = sorted(
            products
                .into_iter()
                .filter_map(|uuid| tables.live_product(uuid).cloned())
                .collect(),
        );

        found.dedup_by_key(|product| product.uuid);

        Ok(found)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        product.fields.validate()?;

        let mut tables = self.store.write().await;

        if tables.products.contains_key(&product.uuid)
            || sku_taken(&tables, &product.fields.sku, None)
        {
            return Err(ProductsServiceError::AlreadyExists);
        }

        let now = Timestamp::now();
        let fields = product.fields;

        let record = ProductRecord {
            uuid: product.uuid,
            sku: fields.sku,
            title: fields.title,
            description: fields.description,
            image_url: fields.image_url,
            category: fields.category,
            price: fields.price,
            sale_price: fields.sale_price,
            details: fields.details,
            average_rating: 0.0,
            total_reviews: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        tables.products.insert(record.uuid, record.clone());

        Ok(record)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        fields: ProductFields,
    ) -> Result<ProductRecord, ProductsServiceError> {
        fields.validate()?;

        let mut tables = self.store.write().await;

        if tables.live_product(product).is_none() {
            return Err(ProductsServiceError::NotFound);
        }

        if sku_taken(&tables, &fields.sku, Some(product)) {
            return Err(ProductsServiceError::AlreadyExists);
        }

        let record = tables
            .products
            .get_mut(&product)
            .ok_or(ProductsServiceError::NotFound)?;

        record.sku = fields.sku;
        record.title = fields.title;
        record.description = fields.description;
        record.image_url = fields.image_url;
        record.category = fields.category;
        record.price = fields.price;
        record.sale_price = fields.sale_price;
        record.details = fields.details;
        record.updated_at = Timestamp::now();

        Ok(record.clone())
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tables = self.store.write().await;

        let record = tables
            .products
            .get_mut(&product)
            .filter(|record| record.deleted_at.is_none())
            .ok_or(ProductsServiceError::NotFound)?;

        let now = Timestamp::now();

        record.deleted_at = Some(now);
        record.updated_at = now;

        Ok(())
    }
}
