use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::db::queries::{pots, providers};
use crate::error::{AppError, AppResult};
use crate::handlers::{non_blank, required};
use crate::models::pot::DEFAULT_CURRENCY;
use crate::models::{NewPot, Pot, PotStatus};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotPayload {
    pub provider_id: Option<i64>,
    pub name: String,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub plan_number: Option<String>,
    pub scheme_number: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Pot>>> {
    let conn = state.db.get()?;
    Ok(Json(pots::list_pots(&conn)?))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Pot>> {
    let conn = state.db.get()?;

    let pot = pots::get_pot(&conn, id)?.ok_or_else(|| AppError::NotFound("Pot not found".into()))?;

    Ok(Json(pot))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<PotPayload>,
) -> AppResult<(StatusCode, Json<Pot>)> {
    let name = required(&payload.name, "Name")?;

    let status = match non_blank(payload.status) {
        Some(s) => s.parse::<PotStatus>().map_err(AppError::Validation)?,
        None => PotStatus::default(),
    };

    let currency = non_blank(payload.currency)
        .map(|c| c.to_uppercase())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let conn = state.db.get()?;

    if let Some(provider_id) = payload.provider_id {
        if !providers::provider_exists(&conn, provider_id)? {
            return Err(AppError::Validation(format!(
                "Provider {} does not exist",
                provider_id
            )));
        }
    }

    let new_pot = NewPot {
        provider_id: payload.provider_id,
        name,
        currency,
        status,
        notes: non_blank(payload.notes),
        plan_number: non_blank(payload.plan_number),
        scheme_number: non_blank(payload.scheme_number),
    };

    let id = pots::create_pot(&conn, &new_pot)?;
    let pot = pots::get_pot(&conn, id)?
        .ok_or_else(|| AppError::Internal("Pot vanished after insert".into()))?;

    Ok((StatusCode::CREATED, Json(pot)))
}
