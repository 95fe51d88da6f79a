use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::ReceiptPayload;
use crate::error::AppError;
use crate::points::Score;
use crate::use_cases::{AwardPoints, ProcessReceipt};
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ReceiptId {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Points {
    pub points: Score,
}

pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptPayload>, JsonRejection>,
) -> Result<Json<ReceiptId>, AppError> {
    let Json(payload) = payload?;

    let output = ProcessReceipt::new(state.store.clone())
        .execute(&payload)
        .await?;

    Ok(Json(ReceiptId { id: output.id }))
}

pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Points>, AppError> {
    let output = AwardPoints::new(state.store.clone()).execute(&id).await?;

    Ok(Json(Points {
        points: output.points,
    }))
}
