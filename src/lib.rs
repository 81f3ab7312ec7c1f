pub mod config;
pub mod discovery;
pub mod routes;

use axum::Router;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::AppConfig, discovery::Discovery};

/// Shared application state.
#[derive(Clone)]
pub struct Ctx {
    pub config: Arc<AppConfig>,
    /// None when the configured backend is missing its credential; handlers
    /// surface that as an explicit configuration error.
    pub discovery: Option<Discovery>,
}

/// Uniform JSON envelope for API responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            message: "ok".to_string(),
            data: Some(data),
        }
    }
}

/// Handler result: payload envelope or (status, error envelope).
pub type ApiResult<T> = Result<
    axum::Json<ApiResponse<T>>,
    (axum::http::StatusCode, axum::Json<ApiResponse<()>>),
>;

/// Assemble the application router.
pub fn app(ctx: Ctx) -> Router {
    Router::new()
        .merge(routes::api::mount())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
