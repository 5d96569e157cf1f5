//! Integration tests for the PostgreSQL repositories
//!
//! These tests require a PostgreSQL database holding the hospital schema and
//! are marked with #[ignore] for CI.
//! Run with: DATABASE_URL=postgres://... cargo test --test repository_tests -- --ignored

use hospital_query_common::config::DatabaseConfig;
use hospital_query_domain::BedNumber;
use hospital_query_infrastructure::{
    ConnectionFactory, Error, PatientRepository, PgPatientRepository, PgUserRepository,
    UserRepository,
};
use std::sync::Arc;
use std::time::Duration;

fn connections() -> Arc<ConnectionFactory> {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let config = DatabaseConfig {
        connect_string: url,
        connect_timeout_seconds: 5,
        statement_timeout_seconds: Some(30),
        ..Default::default()
    };
    Arc::new(ConnectionFactory::new(&config).expect("valid DATABASE_URL"))
}

/// Backends held by the connecting user, not counting the one asking.
async fn open_backends(factory: &ConnectionFactory) -> i64 {
    factory
        .run(|conn| {
            Box::pin(async move {
                sqlx::query_scalar::<_, i64>(
                    "SELECT count(*) FROM pg_stat_activity \
                     WHERE usename = current_user AND pid <> pg_backend_pid()",
                )
                .fetch_one(conn)
                .await
                .map_err(Error::from)
            })
        })
        .await
        .unwrap()
}

#[tokio::test]
#[ignore]
async fn test_active_users_are_filtered() {
    let repo = PgUserRepository::new(connections());

    let users = repo.list_active().await.unwrap();

    for user in &users {
        assert_eq!(user.sn_ativo, "S");
        assert!(!user.cd_usuario.starts_with(|c: char| c.is_ascii_digit()));
    }
    let codes: Vec<_> = users.iter().map(|u| u.cd_usuario.clone()).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);
}

#[tokio::test]
#[ignore]
async fn test_bed_query_is_subset_of_census() {
    let repo = PgPatientRepository::new(connections());

    let census = repo.list_interned().await.unwrap();
    let Some(first) = census.first() else {
        return;
    };

    let bed = BedNumber::try_from(first.cd_leito).unwrap();
    let in_bed = repo.list_interned_in_bed(bed).await.unwrap();

    assert!(!in_bed.is_empty());
    assert!(in_bed.iter().all(|p| p.cd_leito == first.cd_leito));
    assert!(in_bed.iter().all(|p| census.contains(p)));
}

#[tokio::test]
#[ignore]
async fn test_repeated_queries_are_stable() {
    let repo = PgUserRepository::new(connections());

    let first = repo.list_active().await.unwrap();
    let second = repo.list_active().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
#[ignore]
async fn test_failed_query_releases_connection() {
    let factory = connections();
    let before = open_backends(&factory).await;

    for _ in 0..5 {
        let result = factory
            .run(|conn| {
                Box::pin(async move {
                    sqlx::query("SELECT 1/0")
                        .execute(conn)
                        .await
                        .map(|_| ())
                        .map_err(Error::from)
                })
            })
            .await;
        assert!(matches!(result, Err(Error::Database(_))));
    }

    // The server reaps a backend shortly after the client terminates it.
    let mut after = open_backends(&factory).await;
    for _ in 0..20 {
        if after <= before {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
        after = open_backends(&factory).await;
    }
    assert!(after <= before, "{} backends left open, started with {}", after, before);
}
