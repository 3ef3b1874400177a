use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::db::queries::{pots, snapshots};
use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::models::{NewSnapshot, Snapshot};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPayload {
    pub pot_id: i64,
    pub date: NaiveDate,
    pub balance: Decimal,
    pub source: Option<String>,
    pub note: Option<String>,
}

pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Snapshot>> {
    let conn = state.db.get()?;

    let snapshot = snapshots::get_snapshot(&conn, id)?
        .ok_or_else(|| AppError::NotFound("Snapshot not found".into()))?;

    Ok(Json(snapshot))
}

pub async fn list_for_pot(
    State(state): State<AppState>,
    Path(pot_id): Path<i64>,
) -> AppResult<Json<Vec<Snapshot>>> {
    let conn = state.db.get()?;

    if !pots::pot_exists(&conn, pot_id)? {
        return Err(AppError::NotFound("Pot not found".into()));
    }

    Ok(Json(snapshots::list_snapshots_for_pot(&conn, pot_id)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SnapshotPayload>,
) -> AppResult<(StatusCode, Json<Snapshot>)> {
    let conn = state.db.get()?;

    if !pots::pot_exists(&conn, payload.pot_id)? {
        return Err(AppError::Validation(format!(
            "Pot {} does not exist",
            payload.pot_id
        )));
    }

    let new_snapshot = NewSnapshot {
        pot_id: payload.pot_id,
        date: payload.date,
        balance: payload.balance,
        source: non_blank(payload.source),
        note: non_blank(payload.note),
    };

    let id = snapshots::create_snapshot(&conn, &new_snapshot)?;
    let snapshot = snapshots::get_snapshot(&conn, id)?
        .ok_or_else(|| AppError::Internal("Snapshot vanished after insert".into()))?;

    Ok((StatusCode::CREATED, Json(snapshot)))
}
