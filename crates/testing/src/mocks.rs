//! Mock implementations of the repositories.
//!
//! In-memory stand-ins for testing handlers without a database. Each mock
//! counts the queries it served and can be switched into a failing mode.

use async_trait::async_trait;
use hospital_query_domain::{BedNumber, PatientRecord, UserRecord};
use hospital_query_infrastructure::{Error, PatientRepository, Result, UserRepository};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

fn simulated_failure() -> Error {
    Error::Database(sqlx::Error::Protocol("simulated database failure".to_string()))
}

/// Mock user repository for testing
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<Vec<UserRecord>>>,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let repo = Self::new();
        *repo.users.write() = users;
        repo
    }

    pub fn set_users(&self, users: Vec<UserRecord>) {
        *self.users.write() = users;
    }

    /// Make every subsequent query return a database error.
    pub fn fail_queries(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of queries served, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn list_active(&self) -> Result<Vec<UserRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }
        Ok(self.users.read().clone())
    }
}

/// Mock patient repository for testing
#[derive(Clone, Default)]
pub struct MockPatientRepository {
    patients: Arc<RwLock<Vec<PatientRecord>>>,
    bed_queries: Arc<RwLock<Vec<BedNumber>>>,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl MockPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patients(patients: Vec<PatientRecord>) -> Self {
        let repo = Self::new();
        *repo.patients.write() = patients;
        repo
    }

    /// Make every subsequent query return a database error.
    pub fn fail_queries(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of queries served, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Bed values bound into bed queries, in call order.
    pub fn bed_queries(&self) -> Vec<BedNumber> {
        self.bed_queries.read().clone()
    }
}

#[async_trait]
impl PatientRepository for MockPatientRepository {
    async fn list_interned(&self) -> Result<Vec<PatientRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }
        Ok(self.patients.read().clone())
    }

    async fn list_interned_in_bed(&self, bed: BedNumber) -> Result<Vec<PatientRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bed_queries.write().push(bed);
        if self.failing.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }
        Ok(self
            .patients
            .read()
            .iter()
            .filter(|p| p.cd_leito == bed.as_i64())
            .cloned()
            .collect())
    }
}
