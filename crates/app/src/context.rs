//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    auth::{AuthService, StaticTokenAuthService},
    database::{self, Db},
    domain::{
        carts::{CartsService, MemoryCartsService, PgCartsService},
        products::{MemoryProductsService, PgProductsService, ProductsService},
        reviews::{MemoryReviewsService, PgReviewsService, ReviewsService},
        wishlists::{MemoryWishlistsService, PgWishlistsService, WishlistsService},
    },
    memory::MemoryStore,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub wishlists: Arc<dyn WishlistsService>,
    pub reviews: Arc<dyn ReviewsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL, applying any pending
    /// migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str, admin_token: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        let db = Db::new(pool);

        info!("using postgres storage");

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            wishlists: Arc::new(PgWishlistsService::new(db.clone())),
            reviews: Arc::new(PgReviewsService::new(db)),
            auth: Arc::new(StaticTokenAuthService::new(admin_token)),
        })
    }

    /// Build application context backed by process memory. State is lost on
    /// shutdown.
    #[must_use]
    pub fn in_memory(admin_token: &str) -> Self {
        let store = MemoryStore::new();

        info!("using in-memory storage");

        Self {
            products: Arc::new(MemoryProductsService::new(store.clone())),
            carts: Arc::new(MemoryCartsService::new(store.clone())),
            wishlists: Arc::new(MemoryWishlistsService::new(store.clone())),
            reviews: Arc::new(MemoryReviewsService::new(store)),
            auth: Arc::new(StaticTokenAuthService::new(admin_token)),
        }
    }
}
