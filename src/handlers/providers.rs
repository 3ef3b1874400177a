use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::db::queries::providers;
use crate::error::{AppError, AppResult};
use crate::handlers::{non_blank, required};
use crate::models::{NewProvider, Provider};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Provider>>> {
    let conn = state.db.get()?;
    Ok(Json(providers::list_providers(&conn)?))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Provider>> {
    let conn = state.db.get()?;

    let provider = providers::get_provider(&conn, id)?
        .ok_or_else(|| AppError::NotFound("Provider not found".into()))?;

    Ok(Json(provider))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewProvider>,
) -> AppResult<(StatusCode, Json<Provider>)> {
    let new_provider = NewProvider {
        name: required(&payload.name, "Name")?,
        notes: non_blank(payload.notes),
    };

    let conn = state.db.get()?;
    let id = providers::create_provider(&conn, &new_provider)?;
    let provider = providers::get_provider(&conn, id)?
        .ok_or_else(|| AppError::Internal("Provider vanished after insert".into()))?;

    Ok((StatusCode::CREATED, Json(provider)))
}
