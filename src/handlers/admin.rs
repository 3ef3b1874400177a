use axum::extract::State;
use axum::http::StatusCode;

use crate::db::queries::maintenance;
use crate::error::AppResult;
use crate::state::AppState;

pub async fn clear_all(State(state): State<AppState>) -> AppResult<StatusCode> {
    let conn = state.db.get()?;

    maintenance::clear_all_data(&conn)?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear_pots(State(state): State<AppState>) -> AppResult<StatusCode> {
    let conn = state.db.get()?;

    maintenance::clear_pots(&conn)?;

    Ok(StatusCode::NO_CONTENT)
}
