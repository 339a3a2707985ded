//! API routes module

pub mod health;
pub mod products;
pub mod utility;

use axum::Router;

use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .merge(utility::info_router(state.config.app))
}

/// Routes mounted at the root: welcome, docs redirect and probes
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .merge(utility::router())
        .merge(health::router(state.db.clone()))
}
