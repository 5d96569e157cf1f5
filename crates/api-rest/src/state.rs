//! Application state and dependency injection.
//!
//! The state only holds the repositories; each handler call still opens its
//! own database connection through them.

use hospital_query_common::config::DatabaseConfig;
use hospital_query_infrastructure::{
    ConnectionFactory, PatientRepository, PgPatientRepository, PgUserRepository, UserRepository,
};
use std::sync::Arc;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// User queries
    pub users: Arc<dyn UserRepository>,

    /// Interned-patient queries
    pub patients: Arc<dyn PatientRepository>,
}

impl AppState {
    /// Create application state backed by PostgreSQL.
    pub fn from_config(config: &DatabaseConfig) -> hospital_query_infrastructure::Result<Self> {
        let connections = Arc::new(ConnectionFactory::new(config)?);

        Ok(Self {
            users: Arc::new(PgUserRepository::new(Arc::clone(&connections))),
            patients: Arc::new(PgPatientRepository::new(connections)),
        })
    }

    /// Create application state with custom repository implementations
    pub fn with_repositories<U, P>(users: U, patients: P) -> Self
    where
        U: UserRepository + 'static,
        P: PatientRepository + 'static,
    {
        Self {
            users: Arc::new(users),
            patients: Arc::new(patients),
        }
    }
}
