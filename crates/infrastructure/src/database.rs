//! Database module - per-request PostgreSQL connections
//!
//! Every repository call opens its own connection, runs one statement and
//! closes the connection again. There is no pool; [`ConnectionFactory::run`]
//! is the only way to get at a connection and it always releases it.
//!
//! The queries are written for PostgreSQL, so deployments point
//! `connect_string` at a PostgreSQL copy of the hospital schema
//! (`dbasgu.usuarios`, `atendime`, `paciente`, `leito`).

use futures::future::BoxFuture;
use hospital_query_common::config::DatabaseConfig;
use sqlx::{postgres::PgConnectOptions, Connection, PgConnection};
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

use crate::{Error, Result};

/// Opens connections from configuration built once at start-up.
#[derive(Clone)]
pub struct ConnectionFactory {
    options: PgConnectOptions,
    connect_timeout: Duration,
    statement_timeout: Option<Duration>,
}

impl ConnectionFactory {
    /// Build a factory from the database section of the configuration.
    ///
    /// Explicit `user` / `password` settings win over credentials embedded in
    /// the connect string.
    pub fn new(config: &DatabaseConfig) -> Result<Self> {
        let mut options = PgConnectOptions::from_str(&config.connect_string)
            .map_err(|e| Error::Configuration(format!("invalid connect string: {}", e)))?;

        if let Some(user) = &config.user {
            options = options.username(user);
        }
        if let Some(password) = &config.password {
            options = options.password(password);
        }

        Ok(Self {
            options,
            connect_timeout: config.connect_timeout(),
            statement_timeout: config.statement_timeout(),
        })
    }

    /// Login user the factory will connect as.
    pub fn username(&self) -> &str {
        self.options.get_username()
    }

    /// Target database host.
    pub fn host(&self) -> &str {
        self.options.get_host()
    }

    /// Run `op` on a fresh connection and close the connection afterwards.
    ///
    /// The connection is closed whether `op` succeeds or fails. If the
    /// returned future is dropped mid-query, dropping the connection shuts the
    /// socket down.
    ///
    /// ```rust,ignore
    /// let rows = factory
    ///     .run(|conn| Box::pin(async move {
    ///         sqlx::query(SELECT_ACTIVE_USERS).fetch_all(conn).await.map_err(Error::from)
    ///     }))
    ///     .await?;
    /// ```
    #[instrument(skip(self, op), fields(host = %self.host()))]
    pub async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send,
        F: for<'c> FnOnce(&'c mut PgConnection) -> BoxFuture<'c, Result<T>> + Send,
    {
        let started = Instant::now();
        let mut conn = self.connect().await?;

        let outcome = op(&mut conn).await;
        release(conn).await;

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = outcome.is_ok(),
            "Database connection released"
        );
        outcome
    }

    async fn connect(&self) -> Result<PgConnection> {
        let mut conn = tokio::time::timeout(
            self.connect_timeout,
            PgConnection::connect_with(&self.options),
        )
        .await
        .map_err(|_| {
            Error::Timeout(format!(
                "opening a database connection took longer than {}s",
                self.connect_timeout.as_secs()
            ))
        })??;

        if let Some(timeout) = self.statement_timeout {
            let set_timeout = format!("SET statement_timeout = {}", timeout.as_millis());
            if let Err(e) = sqlx::query(&set_timeout).execute(&mut conn).await {
                release(conn).await;
                return Err(Error::Database(e));
            }
        }

        debug!("Database connection opened");
        Ok(conn)
    }
}

impl std::fmt::Debug for ConnectionFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionFactory")
            .field("host", &self.host())
            .field("username", &self.username())
            .field("connect_timeout", &self.connect_timeout)
            .field("statement_timeout", &self.statement_timeout)
            .finish()
    }
}

/// Gracefully close a connection; failures are logged, not returned.
async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close database connection cleanly");
    }
}
