//! Postgres test databases.
//!
//! One container is started per test binary and shared by every test. Each
//! [`TestDb`] is a separate database inside it, created empty and migrated,
//! so tests never observe each other's rows.

use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;

const USER: &str = "atelier_test";
const PASSWORD: &str = "atelier_test_password";

/// The shared server. Host and port are resolved once so later tests, which
/// run on their own runtimes, never talk to the container API again.
struct Server {
    _container: ContainerAsync<PostgresImage>,
    host: String,
    port: u16,
}

impl Server {
    fn url(&self, database: &str) -> String {
        format!(
            "postgresql://{USER}:{PASSWORD}@{}:{}/{database}",
            self.host, self.port
        )
    }
}

static SERVER: Lazy<OnceCell<Server>> = Lazy::new(OnceCell::new);

static NEXT_DATABASE: AtomicU64 = AtomicU64::new(0);

async fn start_server() -> Server {
    let container = PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name(USER)
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
        .unwrap_or_else(|_| "localhost".to_string());

    Server {
        _container: container,
        host,
        port,
    }
}

/// A unique database name for this process. Only ASCII letters, digits and
/// underscores are used, so the name never needs quoting beyond identifiers.
fn database_name() -> String {
    format!(
        "atelier_test_{}_{}",
        std::process::id(),
        NEXT_DATABASE.fetch_add(1, Ordering::Relaxed)
    )
}

/// An isolated, migrated database in the shared test server.
#[derive(Debug, Clone)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl TestDb {
    pub async fn new() -> Self {
        let server = SERVER.get_or_init(start_server).await;
        let name = database_name();

        let mut admin = PgConnection::connect(&server.url("postgres"))
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("Failed to create test database");

        admin
            .close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&server.url(&name))
            .await
            .expect("Failed to create pool for database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool, name }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    #[allow(dead_code)]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_names_are_unique_identifiers() {
        let first = database_name();
        let second = database_name();

        assert_ne!(first, second);

        for name in [first, second] {
            assert!(name.len() <= 63, "{name} exceeds the identifier limit");
            assert!(
                name.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "{name} contains characters that need quoting"
            );
        }
    }

    #[tokio::test]
    async fn migrated_schema_is_available() {
        let test_db = TestDb::new().await;

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_schema = 'public' \
               AND table_name IN ('products', 'cart_items', 'wishlist_items', 'reviews')",
        )
        .fetch_one(test_db.pool())
        .await
        .expect("Failed to inspect schema");

        assert_eq!(tables, 4);
    }
}
