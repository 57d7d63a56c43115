//! HTTP handlers for gopay-service.

pub mod topup;

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use service_core::error::AppError;

use crate::services::get_metrics;

pub const HEALTH_MESSAGE: &str = "GoPay Spring Boot Service is running!";

/// Liveness probe. Plain text, always 200.
pub async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}

/// Prometheus metrics endpoint.
pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        get_metrics(),
    )
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
