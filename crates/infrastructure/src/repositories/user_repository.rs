//! User repository implementation.
//!
//! PostgreSQL-backed read access to the active-user listing.

use async_trait::async_trait;
use hospital_query_domain::UserRecord;
use sqlx::{postgres::PgRow, Row};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::{database::ConnectionFactory, queries, Error, Result};

/// Repository trait for user queries.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Active users with a registered CPF, ordered by user code.
    async fn list_active(&self) -> Result<Vec<UserRecord>>;
}

/// PostgreSQL implementation of UserRepository.
pub struct PgUserRepository {
    connections: Arc<ConnectionFactory>,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository.
    pub fn new(connections: Arc<ConnectionFactory>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn list_active(&self) -> Result<Vec<UserRecord>> {
        let rows = self
            .connections
            .run(|conn| {
                Box::pin(async move {
                    sqlx::query(queries::SELECT_ACTIVE_USERS)
                        .fetch_all(conn)
                        .await
                        .map_err(Error::from)
                })
            })
            .await?;

        let users = rows
            .iter()
            .map(row_to_user)
            .collect::<Result<Vec<_>>>()?;

        info!(count = users.len(), "Fetched active users");
        debug!(rows = ?users, "Active user rows");
        Ok(users)
    }
}

/// Convert a database row to a UserRecord.
fn row_to_user(row: &PgRow) -> Result<UserRecord> {
    Ok(UserRecord {
        cd_usuario: row.try_get("cd_usuario")?,
        nm_usuario: row.try_get("nm_usuario")?,
        cpf: row.try_get("cpf")?,
        sn_senha_plogin: row.try_get("sn_senha_plogin")?,
        sn_ativo: row.try_get("sn_ativo")?,
    })
}
