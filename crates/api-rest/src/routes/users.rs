//! User endpoints.

use crate::{error::ApiResult, state::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use hospital_query_domain::{UserField, UserRecord};
use serde_json::Value;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/cpf/:cpf", get(users_by_cpf))
        .route("/users/:parameter", get(user_field_values))
}

/// All active users, as returned by the database.
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserRecord>>> {
    let users = state.users.list_active().await?;
    Ok(Json(users))
}

/// One value per active user: the field named by `parameter`.
///
/// The name is checked against the allow-list before any query runs.
async fn user_field_values(
    State(state): State<AppState>,
    Path(parameter): Path<String>,
) -> ApiResult<Json<Vec<Value>>> {
    let field: UserField = parameter.parse()?;

    let users = state.users.list_active().await?;
    let values = users.iter().map(|user| user.field(field)).collect();

    Ok(Json(values))
}

/// Active users whose CPF equals `cpf` exactly.
async fn users_by_cpf(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> ApiResult<Json<Vec<UserRecord>>> {
    let users = state
        .users
        .list_active()
        .await?
        .into_iter()
        .filter(|user| user.has_cpf(&cpf))
        .collect();

    Ok(Json(users))
}
