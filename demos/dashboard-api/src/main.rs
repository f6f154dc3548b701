mod error;
mod params;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fx_dashboard=info,dashboard_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("loading operations data");
    let dashboard = fx_dashboard::AsyncDashboard::builder()
        .build()
        .await
        .expect("Failed to load dashboard data");
    tracing::info!(dashboard = %dashboard.get(), "dashboard ready");

    let app = routes::router(Arc::new(AppState { dashboard }));

    let addr = fx_dashboard::config::bind_addr();
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
