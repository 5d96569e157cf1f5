//! Patient repository implementation.
//!
//! PostgreSQL-backed read access to the interned-patient census.

use async_trait::async_trait;
use hospital_query_domain::{BedNumber, PatientRecord};
use sqlx::{postgres::PgRow, Row};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::{database::ConnectionFactory, queries, Error, Result};

/// Repository trait for interned-patient queries.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Every patient in an open inpatient encounter.
    async fn list_interned(&self) -> Result<Vec<PatientRecord>>;

    /// Patients in an open inpatient encounter occupying `bed`.
    async fn list_interned_in_bed(&self, bed: BedNumber) -> Result<Vec<PatientRecord>>;
}

/// PostgreSQL implementation of PatientRepository.
pub struct PgPatientRepository {
    connections: Arc<ConnectionFactory>,
}

impl PgPatientRepository {
    /// Create a new PostgreSQL patient repository.
    pub fn new(connections: Arc<ConnectionFactory>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl PatientRepository for PgPatientRepository {
    #[instrument(skip(self))]
    async fn list_interned(&self) -> Result<Vec<PatientRecord>> {
        let rows = self
            .connections
            .run(|conn| {
                Box::pin(async move {
                    sqlx::query(queries::SELECT_INTERNED_PATIENTS)
                        .fetch_all(conn)
                        .await
                        .map_err(Error::from)
                })
            })
            .await?;

        let patients = rows
            .iter()
            .map(row_to_patient)
            .collect::<Result<Vec<_>>>()?;

        info!(count = patients.len(), "Fetched interned patients");
        debug!(rows = ?patients, "Interned patient rows");
        Ok(patients)
    }

    #[instrument(skip(self, bed), fields(bed = %bed))]
    async fn list_interned_in_bed(&self, bed: BedNumber) -> Result<Vec<PatientRecord>> {
        let rows = self
            .connections
            .run(move |conn| {
                Box::pin(async move {
                    sqlx::query(queries::SELECT_INTERNED_PATIENTS_BY_BED)
                        .bind(bed.as_i64())
                        .fetch_all(conn)
                        .await
                        .map_err(Error::from)
                })
            })
            .await?;

        let patients = rows
            .iter()
            .map(row_to_patient)
            .collect::<Result<Vec<_>>>()?;

        info!(count = patients.len(), "Fetched interned patients for bed");
        debug!(rows = ?patients, "Interned patient rows");
        Ok(patients)
    }
}

/// Convert a database row to a PatientRecord.
fn row_to_patient(row: &PgRow) -> Result<PatientRecord> {
    Ok(PatientRecord {
        cd_paciente: row.try_get("cd_paciente")?,
        nm_paciente: row.try_get("nm_paciente")?,
        dt_nascimento: row.try_get("dt_nascimento")?,
        nr_cpf: row.try_get("nr_cpf")?,
        tp_sexo: row.try_get("tp_sexo")?,
        cd_atendimento: row.try_get("cd_atendimento")?,
        dt_atendimento: row.try_get("dt_atendimento")?,
        ds_leito: row.try_get("ds_leito")?,
        cd_leito: row.try_get("cd_leito")?,
    })
}
