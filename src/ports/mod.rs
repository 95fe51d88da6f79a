//! Storage port for receipts.
//! Write-once: receipts are stored and read back, never updated or deleted.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Receipt;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No receipt found for id {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored receipt is no longer valid: {0}")]
    Corrupt(#[from] ValidationError),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores a validated receipt and returns its newly minted identifier.
    async fn put(&self, receipt: &Receipt) -> StoreResult<String>;

    async fn get(&self, id: &str) -> StoreResult<Receipt>;

    async fn exists(&self, id: &str) -> StoreResult<bool>;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;

    async fn check(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Opaque, content-independent receipt identifier.
pub fn generate_receipt_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
