//! Interned-patient endpoints.

use crate::{error::ApiResult, state::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use hospital_query_domain::{BedNumber, PatientRecord};
use tracing::info;

/// Patient routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pacientes/internados", get(list_interned))
        .route("/pacientes/internados/:leito", get(list_interned_in_bed))
}

/// Every patient currently interned.
async fn list_interned(State(state): State<AppState>) -> ApiResult<Json<Vec<PatientRecord>>> {
    let patients = state.patients.list_interned().await?;
    Ok(Json(patients))
}

/// Patients currently interned in bed `leito`.
async fn list_interned_in_bed(
    State(state): State<AppState>,
    Path(leito): Path<String>,
) -> ApiResult<Json<Vec<PatientRecord>>> {
    info!(leito = %leito, "Bed lookup requested");
    let bed = BedNumber::parse(Some(&leito))?;

    let patients = state.patients.list_interned_in_bed(bed).await?;
    info!(bed = %bed, count = patients.len(), "Bed lookup");

    Ok(Json(patients))
}
