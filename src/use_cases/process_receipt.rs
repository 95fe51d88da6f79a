//! Process receipt use case.
//! Validates a submitted receipt and hands it to the ReceiptStore.

use std::sync::Arc;

use super::UseCaseError;
use crate::domain::ReceiptPayload;
use crate::ports::ReceiptStore;
use crate::validation::validate_receipt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReceiptOutput {
    pub id: String,
}

pub struct ProcessReceipt {
    store: Arc<dyn ReceiptStore>,
}

impl ProcessReceipt {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, payload: &ReceiptPayload) -> Result<ProcessReceiptOutput, UseCaseError> {
        let receipt = validate_receipt(payload).map_err(|e| {
            tracing::warn!(field = %e.field, constraint = e.constraint.as_str(), "Receipt rejected: {}", e.message);
            e
        })?;

        let id = self.store.put(&receipt).await?;
        tracing::info!(receipt_id = %id, retailer = %receipt.retailer, items = receipt.items.len(), "Receipt stored");

        Ok(ProcessReceiptOutput { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryReceiptStore;
    use crate::domain::ItemPayload;

    fn payload(items: Vec<ItemPayload>) -> ReceiptPayload {
        ReceiptPayload {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            items,
            total: "2.65".to_string(),
        }
    }

    #[tokio::test]
    async fn stores_valid_receipt() {
        let store = InMemoryReceiptStore::new();
        let use_case = ProcessReceipt::new(Arc::new(store.clone()));

        let output = use_case
            .execute(&payload(vec![ItemPayload {
                short_description: "Pepsi - 12-oz".to_string(),
                price: "1.25".to_string(),
            }]))
            .await
            .unwrap();

        assert!(store.exists(&output.id).await.unwrap());
    }

    #[tokio::test]
    async fn invalid_receipt_is_never_stored() {
        let store = InMemoryReceiptStore::new();
        let use_case = ProcessReceipt::new(Arc::new(store.clone()));

        let result = use_case.execute(&payload(vec![])).await;

        assert!(matches!(result, Err(UseCaseError::Validation(_))));
        assert!(store.is_empty().await);
    }
}
