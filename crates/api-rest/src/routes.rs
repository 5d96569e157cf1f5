//! HTTP route handlers.
//!
//! Resource routes are mounted under [`API_PREFIX`]; the health probe sits at
//! the root.

pub mod health;
pub mod patients;
pub mod users;

use crate::state::AppState;
use axum::Router;

/// Common prefix of every resource route.
pub const API_PREFIX: &str = "/api";

/// Create all resource routes (unprefixed)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(users::routes())
        .merge(patients::routes())
}

// Re-export for convenience
pub use health::routes as health_routes;
