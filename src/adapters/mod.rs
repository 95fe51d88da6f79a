pub mod memory_receipt_store;
pub mod sqlite_receipt_store;

pub use memory_receipt_store::InMemoryReceiptStore;
pub use sqlite_receipt_store::SqliteReceiptStore;

use std::sync::Arc;

use crate::config::Config;
use crate::ports::{ReceiptStore, StoreResult};

/// Picks the store backend: SQLite when a database URL is configured,
/// otherwise an in-process map.
pub async fn build_store(config: &Config) -> StoreResult<Arc<dyn ReceiptStore>> {
    match &config.database_url {
        Some(url) => Ok(Arc::new(SqliteReceiptStore::connect(url).await?)),
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory receipt store");
            Ok(Arc::new(InMemoryReceiptStore::new()))
        }
    }
}
