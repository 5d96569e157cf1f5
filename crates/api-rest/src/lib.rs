//! Hospital Query REST API
//!
//! Axum-based read-only HTTP API over the hospital database: active users
//! and interned patients.
//!
//! ## Architecture
//!
//! - **app**: Application builder (state, routes, middleware)
//! - **routes**: HTTP route handlers organized by resource
//! - **middleware**: Request ID propagation and request logging
//! - **state**: Repositories shared with the handlers
//! - **error**: HTTP error handling and conversion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hospital_query_api_rest::create_app;
//! use hospital_query_common::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load()?;
//!     let app = create_app(&config)?;
//!
//!     let listener = tokio::net::TcpListener::bind(config.server_address()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::{build_router, create_app};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
