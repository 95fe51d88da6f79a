pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod points;
pub mod ports;
pub mod use_cases;
pub mod validation;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::ports::ReceiptStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/receipts/process", post(handlers::receipts::process_receipt))
        .route("/receipts/:id/points", get(handlers::receipts::get_points))
        .layer(axum::middleware::from_fn(
            middleware::request_logger::request_logger_middleware,
        ))
        .with_state(state)
}
