use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/meta
///
/// Returns the data source, its size and the designated bank.
pub async fn get_meta(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let dash = state.dashboard.get();
    let dataset = dash.dataset();
    let source = dataset
        .source()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    Ok(Json(json!({
        "source": source,
        "rows": dataset.len(),
        "years": dataset.years(),
        "banks": dataset.banks().len(),
        "designated_bank": dash.settings().designated_bank
    })))
}
