//! In-memory implementation of ReceiptStore.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::Receipt;
use crate::ports::{generate_receipt_id, ReceiptStore, StoreError, StoreResult};

#[derive(Clone, Default)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<String, Receipt>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, receipt: &Receipt) -> StoreResult<String> {
        let id = generate_receipt_id();
        self.receipts
            .write()
            .await
            .insert(id.clone(), receipt.clone());
        Ok(id)
    }

    async fn get(&self, id: &str) -> StoreResult<Receipt> {
        self.receipts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.receipts.read().await.contains_key(id))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
