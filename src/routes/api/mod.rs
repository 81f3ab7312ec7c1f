use axum::Router;

use crate::Ctx;

pub mod detail;
pub mod discover;
pub mod health;

/// Mount all API routes
pub fn mount() -> Router<Ctx> {
    Router::new()
        .merge(health::mount())
        .merge(discover::mount())
        .merge(detail::mount())
}
