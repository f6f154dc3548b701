/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Loaded once at startup and never mutated. Pipeline calls are
    /// dispatched to the blocking pool by the handle itself.
    pub dashboard: fx_dashboard::AsyncDashboard,
}
