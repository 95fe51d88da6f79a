use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use receipt_processor::domain::Receipt;
use receipt_processor::ports::{ReceiptStore, StoreError, StoreResult};
use receipt_processor::{create_app, AppState};
use std::sync::Arc;
use tower::ServiceExt;

/// A store whose backend is unreachable.
struct UnavailableStore;

#[async_trait]
impl ReceiptStore for UnavailableStore {
    async fn put(&self, _receipt: &Receipt) -> StoreResult<String> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get(&self, _id: &str) -> StoreResult<Receipt> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn exists(&self, _id: &str) -> StoreResult<bool> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    fn backend(&self) -> &'static str {
        "unavailable"
    }

    async fn check(&self) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

fn app() -> axum::Router {
    create_app(AppState {
        store: Arc::new(UnavailableStore),
    })
}

#[tokio::test]
async fn test_health_is_unavailable_when_store_fails() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_store_failure_is_internal_error_not_not_found() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/receipts/abc/points")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_store_failure_on_process_is_internal_error() {
    let body = r#"{"retailer":"Target","purchaseDate":"2022-01-01","purchaseTime":"13:01",
        "items":[{"shortDescription":"Pepsi 12PK","price":"1.25"}],"total":"1.25"}"#;

    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/receipts/process")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
