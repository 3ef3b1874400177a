use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::db::queries::{pots, transactions};
use crate::error::{AppError, AppResult};
use crate::handlers::non_blank;
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::state::AppState;

/// Incoming transaction. The type is free text here and is only accepted if
/// it names a known [`TransactionType`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    pub pot_id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub amount: Decimal,
    pub note: Option<String>,
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Transaction>> {
    let conn = state.db.get()?;

    let transaction = transactions::get_transaction(&conn, id)?
        .ok_or_else(|| AppError::NotFound("Transaction not found".into()))?;

    Ok(Json(transaction))
}

pub async fn list_for_pot(
    State(state): State<AppState>,
    Path(pot_id): Path<i64>,
) -> AppResult<Json<Vec<Transaction>>> {
    let conn = state.db.get()?;

    if !pots::pot_exists(&conn, pot_id)? {
        return Err(AppError::NotFound("Pot not found".into()));
    }

    Ok(Json(transactions::list_transactions_for_pot(&conn, pot_id)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<TransactionPayload>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    let transaction_type = payload
        .transaction_type
        .parse::<TransactionType>()
        .map_err(AppError::Validation)?;

    let conn = state.db.get()?;

    if !pots::pot_exists(&conn, payload.pot_id)? {
        return Err(AppError::Validation(format!(
            "Pot {} does not exist",
            payload.pot_id
        )));
    }

    let new_transaction = NewTransaction {
        pot_id: payload.pot_id,
        date: payload.date,
        transaction_type,
        amount: payload.amount,
        note: non_blank(payload.note),
    };

    let id = transactions::create_transaction(&conn, &new_transaction)?;
    let transaction = transactions::get_transaction(&conn, id)?
        .ok_or_else(|| AppError::Internal("Transaction vanished after insert".into()))?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
