pub mod dashboard;
pub mod meta;
pub mod options;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/meta", get(meta::get_meta))
        .route("/api/options", get(options::get_options))
        .route("/api/banks/toggle", get(options::toggle_banks))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/visuals/{visual}", get(dashboard::get_visual))
        .route("/api/updates/{control}", get(dashboard::get_update))
        .route("/api/comparison", get(dashboard::get_comparison))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use fx_dashboard::{AsyncDashboard, Dashboard};
    use serde_json::Value;
    use tower::ServiceExt;

    const CSV: &str = "\
NOME_BANCO,ANO,TRIMESTRE,VOLUME_OP,VOLUME_INTERBANK,RESULT_OP,DESPESA_OP,NUMERO_OP,NUMERO_INTERBANK
BB,2022,1,1000000,500000,2000,-500,90,10
ITAU,2022,1,900000,300000,1500,-300,80,10
SAFRA,2022,1,50000,0,100,0,3,0
BB,2022,2,1100000,400000,2500,-500,110,10
ITAU,2022,2,1000000,200000,2000,-400,100,0
BB,2023,1,1200000,600000,3000,-1000,130,20
";

    fn app() -> Router {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("spread.csv");
        std::fs::write(&path, CSV).unwrap();
        let dashboard = Dashboard::builder().data_path(&path).build().unwrap();
        router(Arc::new(AppState {
            dashboard: AsyncDashboard::from(dashboard),
        }))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let resp = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn meta_reports_dataset_size() {
        let (status, body) = get_json("/api/meta").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], 6);
        assert_eq!(body["designated_bank"], "BB");
    }

    #[tokio::test]
    async fn options_list_filter_choices() {
        let (status, body) = get_json("/api/options").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["years"], serde_json::json!([2022, 2023]));
        assert_eq!(body["data"]["quarters"][1]["label"], "06");
        assert_eq!(body["data"]["initial"]["banks"], serde_json::json!(["BB", "ITAU"]));
    }

    #[tokio::test]
    async fn toggle_requires_clicks() {
        let (status, _) = get_json("/api/banks/toggle").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = get_json("/api/banks/toggle?clicks=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 3);

        let (_, body) = get_json("/api/banks/toggle?clicks=2").await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn dashboard_returns_every_figure() {
        let (status, body) = get_json("/api/dashboard?years=2022&banks=BB,ITAU,SAFRA").await;
        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["pie"]["labels"], serde_json::json!(["BB", "ITAU", "Other"]));
        assert_eq!(data["table"]["total_rows"], 5);
        assert_eq!(data["result_line"]["series"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn empty_bank_list_selects_nothing() {
        let (status, body) = get_json("/api/visuals/table?banks=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["kind"], "table");
        assert_eq!(body["data"]["figure"]["total_rows"], 0);
    }

    #[tokio::test]
    async fn unknown_visual_is_bad_request() {
        let (status, body) = get_json("/api/visuals/heatmap").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("heatmap"));
    }

    #[tokio::test]
    async fn zero_page_size_is_bad_request() {
        let (status, _) = get_json("/api/visuals/table?page_size=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn window_update_only_recomputes_comparison() {
        let (status, body) = get_json("/api/updates/window?window=yearly").await;
        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_object().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data["comparison"]["figure"]["window"], "yearly");
    }

    #[tokio::test]
    async fn comparison_table_shares_by_measure() {
        let (status, body) =
            get_json("/api/comparison?years=2022&quarters=03&window=yearly&measure=count").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body["data"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["label"], "BB");
        assert_eq!(rows[0]["key"], 2022);
        // 100 of 190
        let share = rows[0]["share"].as_f64().unwrap();
        assert!((share - 100.0 * 100.0 / 190.0).abs() < 1e-9);
        assert_eq!(rows[1]["label"], "Market");
    }
}
