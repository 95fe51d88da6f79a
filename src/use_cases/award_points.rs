//! Award points use case.
//! Looks a stored receipt up by id and scores it.

use std::sync::Arc;

use super::UseCaseError;
use crate::points::{self, Score};
use crate::ports::{ReceiptStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsOutput {
    pub points: Score,
}

pub struct AwardPoints {
    store: Arc<dyn ReceiptStore>,
}

impl AwardPoints {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, id: &str) -> Result<PointsOutput, UseCaseError> {
        if !self.store.exists(id).await? {
            return Err(StoreError::NotFound(id.to_string()).into());
        }

        let receipt = self.store.get(id).await?;
        let points = points::calculate(&receipt);
        tracing::info!(receipt_id = %id, points, "Points awarded");

        Ok(PointsOutput { points })
    }
}
