//! Application builder.
//!
//! Assembles routes, middleware, and state into an Axum router.

use crate::{
    middleware::{logging_middleware, request_id_middleware},
    routes,
    state::AppState,
};
use axum::{middleware, Router};
use hospital_query_common::AppConfig;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router backed by PostgreSQL.
///
/// No connection is opened here; the first one is opened by the first request.
pub fn create_app(config: &AppConfig) -> anyhow::Result<Router> {
    let state = AppState::from_config(&config.database)?;
    Ok(build_router(state))
}

/// Build the router around an existing state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .nest(routes::API_PREFIX, routes::api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(logging_middleware)),
        )
}
