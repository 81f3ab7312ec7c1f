use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::{ApiResponse, Ctx};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub version: &'static str,
}

/// Liveness probe
/// GET /api/health
async fn health() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::ok(HealthStatus {
        version: env!("CARGO_PKG_VERSION"),
    }))
}

pub fn mount() -> Router<Ctx> {
    Router::new().route("/api/health", get(health))
}
