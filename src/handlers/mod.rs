pub mod admin;
pub mod pots;
pub mod providers;
pub mod reports;
pub mod snapshots;
pub mod transactions;

use axum::routing::{get, post};
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Providers
        .route("/api/providers", get(providers::list).post(providers::create))
        .route("/api/providers/:id", get(providers::show))
        // Pots
        .route("/api/pots", get(pots::list).post(pots::create))
        .route("/api/pots/:id", get(pots::show))
        .route("/api/pots/:id/snapshots", get(snapshots::list_for_pot))
        .route("/api/pots/:id/transactions", get(transactions::list_for_pot))
        // Snapshots
        .route("/api/snapshots", post(snapshots::create))
        .route("/api/snapshots/:id", get(snapshots::show))
        // Transactions
        .route("/api/transactions", post(transactions::create))
        .route("/api/transactions/:id", get(transactions::show))
        // Reports
        .route("/api/reports/:pot_id", get(reports::show))
        // Maintenance
        .route("/api/admin/clear", post(admin::clear_all))
        .route("/api/admin/clear/pots", post(admin::clear_pots))
        // Health check
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}

/// Trim an optional text field, treating blank as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reject a blank required field.
pub(crate) fn required(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}
