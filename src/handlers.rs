//! Axum handlers over the dispatcher and store

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

use crate::app_state::AppState;
use crate::csv::{ExpenseCsv, VecToCsv};
use crate::dispatch::OperationNotFound;
use crate::BoxError;

/// Inbound expense as posted by the dashboard. Category and note are
/// optional; shape validation stops here, the core trusts these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpensePayload {
    pub date: String,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetPayload {
    pub weekly_budget: f64,
}

pub async fn log_expense_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ExpensePayload>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let args = json!({ "expense": payload });
    let result = app_state
        .dispatcher
        .dispatch("ExpenseLogger", args)
        .map_err(not_found)?;
    Ok(Json(result))
}

pub async fn trends_handler(
    State(app_state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let result = app_state
        .dispatcher
        .dispatch("BudgetTrends", json!({}))
        .map_err(not_found)?;
    Ok(Json(result))
}

pub async fn saving_tip_handler(
    State(app_state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let result = app_state
        .dispatcher
        .dispatch("SavingTip", json!({}))
        .map_err(not_found)?;
    Ok(Json(result))
}

pub async fn set_budget_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<BudgetPayload>,
) -> Result<Json<Value>, (StatusCode, String)> {
    app_state
        .store
        .set_budget(payload.weekly_budget)
        .map_err(internal_error)?;
    Ok(Json(json!({ "weekly_budget": app_state.store.get_budget() })))
}

pub async fn get_budget_handler(State(app_state): State<AppState>) -> Json<Value> {
    Json(json!({ "weekly_budget": app_state.store.get_budget() }))
}

pub async fn export_expenses_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    let rows: Vec<ExpenseCsv> = app_state.store.list().iter().map(|it| it.into()).collect();

    ([(header::CONTENT_TYPE, "text/csv")], rows.to_csv())
}

pub async fn reset_expenses_handler(
    State(app_state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, String)> {
    app_state.store.clear().map_err(internal_error)?;
    Ok(Json(json!({ "status": "All expenses cleared!" })))
}

fn not_found(e: OperationNotFound) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, e.to_string())
}

fn internal_error(e: BoxError) -> (StatusCode, String) {
    error!("Store write failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
