use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use fx_dashboard::dispatch::affected_by;
use fx_dashboard::{Control, Measure, Visual};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::AppError;
use crate::params::ViewParams;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MeasureParams {
    pub measure: Option<String>,
}

/// GET /api/dashboard?years=2022&quarters=03,06&banks=BB,ITAU
///
/// Every figure for the given controls, filtered once.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewParams>,
) -> Result<Json<Value>, AppError> {
    let figures = state
        .dashboard
        .run(move |d| {
            let view = params.view_state(&d.options().initial)?;
            d.figures(&view)
        })
        .await?;
    Ok(Json(json!({ "data": figures })))
}

/// GET /api/visuals/:visual?window=yearly
///
/// A single figure (`result_line`, `spread_line`, `pie`, `comparison` or
/// `table`).
pub async fn get_visual(
    State(state): State<Arc<AppState>>,
    Path(visual): Path<String>,
    Query(params): Query<ViewParams>,
) -> Result<Json<Value>, AppError> {
    let visual: Visual = visual.parse()?;
    let rendered = state
        .dashboard
        .run(move |d| {
            let view = params.view_state(&d.options().initial)?;
            d.render(visual, &view)
        })
        .await?;
    Ok(Json(json!({ "data": rendered })))
}

/// GET /api/updates/:control?banks=BB
///
/// Recomputes only the figures that read `control`, keyed by figure name.
pub async fn get_update(
    State(state): State<Arc<AppState>>,
    Path(control): Path<String>,
    Query(params): Query<ViewParams>,
) -> Result<Json<Value>, AppError> {
    let control: Control = control.parse()?;
    let visuals = affected_by(control);
    let rendered = state
        .dashboard
        .run(move |d| {
            let view = params.view_state(&d.options().initial)?;
            visuals
                .into_iter()
                .map(|v| Ok((v.name().to_string(), serde_json::to_value(d.render(v, &view)?)?)))
                .collect::<fx_dashboard::Result<Map<String, Value>>>()
        })
        .await?;
    Ok(Json(json!({ "control": control.name(), "data": rendered })))
}

/// GET /api/comparison?window=yearly&measure=volume
///
/// The designated-bank-versus-market value table behind the comparison chart.
pub async fn get_comparison(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewParams>,
    Query(measure): Query<MeasureParams>,
) -> Result<Json<Value>, AppError> {
    let measure: Measure = match &measure.measure {
        Some(m) => m.parse()?,
        None => Measure::default(),
    };
    let table = state
        .dashboard
        .run(move |d| {
            let view = params.view_state(&d.options().initial)?;
            Ok(d.comparison_by(&view.selection, view.window, measure))
        })
        .await?;
    let count = table.rows.len();
    Ok(Json(json!({ "data": table, "count": count })))
}
