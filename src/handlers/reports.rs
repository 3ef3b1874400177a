use axum::extract::{Path, State};
use axum::response::Json;

use crate::db::SqlitePotData;
use crate::error::AppResult;
use crate::models::PotReport;
use crate::services::report::build_report;
use crate::state::AppState;

pub async fn show(
    State(state): State<AppState>,
    Path(pot_id): Path<i64>,
) -> AppResult<Json<PotReport>> {
    let conn = state.db.get()?;

    let report = build_report(&SqlitePotData::new(&conn), pot_id)?;

    Ok(Json(report))
}
