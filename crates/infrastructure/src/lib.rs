//! Infrastructure layer for the hospital query API
//!
//! This crate provides:
//! - Per-request PostgreSQL connections with guaranteed release
//! - The fixed SQL statements the API runs
//! - Repository traits and their PostgreSQL implementations
//!
//! ## Architecture
//!
//! Handlers depend on the repository traits only, so the PostgreSQL
//! implementations can be swapped for in-memory ones in tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hospital_query_infrastructure::{ConnectionFactory, PgUserRepository, UserRepository};
//! use std::sync::Arc;
//!
//! let connections = Arc::new(ConnectionFactory::new(&config.database)?);
//! let users = PgUserRepository::new(Arc::clone(&connections));
//! let active = users.list_active().await?;
//! ```

pub mod database;
pub mod queries;
pub mod repositories;

pub use database::ConnectionFactory;
pub use repositories::{PatientRepository, PgPatientRepository, PgUserRepository, UserRepository};

pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure-level errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database errors from sqlx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Timeout errors
    #[error("Timeout: {0}")]
    Timeout(String),
}

impl Error {
    /// Get HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            Error::Database(_) | Error::Configuration(_) => 500,
            Error::Timeout(_) => 503,
        }
    }
}
