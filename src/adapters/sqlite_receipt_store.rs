//! SQLite implementation of ReceiptStore.
//!
//! Receipts are kept in their JSON wire form and passed back through the
//! validator when read.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::domain::{Receipt, ReceiptPayload};
use crate::ports::{generate_receipt_id, ReceiptStore, StoreError, StoreResult};
use crate::validation::validate_receipt;

#[derive(Clone)]
pub struct SqliteReceiptStore {
    pool: SqlitePool,
}

impl SqliteReceiptStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if needed) the database at `database_url` and runs
    /// the embedded migrations.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to `:memory:` is its own database, so pin one.
        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!(database_url, "SQLite receipt store ready");

        Ok(Self::new(pool))
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl ReceiptStore for SqliteReceiptStore {
    async fn put(&self, receipt: &Receipt) -> StoreResult<String> {
        let id = generate_receipt_id();
        let data = serde_json::to_string(&ReceiptPayload::from(receipt))?;

        sqlx::query("INSERT INTO receipts (id, data) VALUES (?, ?)")
            .bind(&id)
            .bind(&data)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn get(&self, id: &str) -> StoreResult<Receipt> {
        let data = sqlx::query_scalar::<_, String>("SELECT data FROM receipts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let payload: ReceiptPayload = serde_json::from_str(&data)?;
        Ok(validate_receipt(&payload)?)
    }

    async fn exists(&self, id: &str) -> StoreResult<bool> {
        let row = sqlx::query_scalar::<_, i64>("SELECT 1 FROM receipts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
