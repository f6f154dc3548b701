use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ToggleParams {
    pub clicks: Option<u64>,
}

/// GET /api/options
///
/// Choices for the year, quarter and bank filters plus the initial selection.
pub async fn get_options(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let options = state.dashboard.run(|d| Ok(d.options())).await?;
    Ok(Json(json!({ "data": options })))
}

/// GET /api/banks/toggle?clicks=3
///
/// Bank selection after the select-all / clear-all button was pressed
/// `clicks` times.
pub async fn toggle_banks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ToggleParams>,
) -> Result<Json<Value>, AppError> {
    let clicks = params
        .clicks
        .ok_or_else(|| AppError::bad_request("Missing required query parameter: clicks"))?;

    let banks = state.dashboard.run(move |d| Ok(d.toggle_banks(clicks))).await?;
    let count = banks.len();
    Ok(Json(json!({ "data": banks, "count": count })))
}
