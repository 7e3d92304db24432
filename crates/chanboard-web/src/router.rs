//! Web router using Axum

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chanboard_core::{run_pass, ChannelSource, CoreError, Dashboard, ViewQuery};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::render;

/// Shared state for all handlers
///
/// Only the source is shared; every request runs its own pass.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ChannelSource>,
    /// Auto-refresh interval of the HTML page
    pub refresh_secs: u64,
}

impl AppState {
    pub fn new(source: Arc<dyn ChannelSource>, refresh_secs: u64) -> Self {
        Self {
            source,
            refresh_secs,
        }
    }
}

/// `?filter=paid&q=12`
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub filter: Option<String>,
    pub q: Option<String>,
}

/// Create the web router
pub fn create_router(state: AppState) -> Router {
    // Read-only API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(state)
}

/// Failure of one request's pass
#[derive(Debug)]
enum PassError {
    Core(CoreError),
    Worker(String),
    Render(std::fmt::Error),
}

impl From<CoreError> for PassError {
    fn from(e: CoreError) -> Self {
        PassError::Core(e)
    }
}

impl PassError {
    fn status(&self) -> StatusCode {
        match self {
            PassError::Core(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            PassError::Core(e) => e.to_string(),
            PassError::Worker(msg) => format!("Pass worker failed: {}", msg),
            PassError::Render(e) => format!("Failed to render dashboard: {}", e),
        }
    }

    fn log(&self) {
        if self.status().is_server_error() {
            error!(error = %self.message(), "Dashboard pass failed");
        }
    }
}

/// Run one pass on a blocking worker and apply the view query
async fn load_dashboard(
    state: &AppState,
    params: &DashboardParams,
) -> Result<(Dashboard, ViewQuery), PassError> {
    let query = ViewQuery::parse(params.filter.as_deref(), params.q.as_deref())?;

    let source = Arc::clone(&state.source);
    let mut dashboard = tokio::task::spawn_blocking(move || run_pass(source.as_ref()))
        .await
        .map_err(|e| PassError::Worker(e.to_string()))??;

    if !query.is_unfiltered() {
        dashboard.channels = query.apply(&dashboard.channels);
    }

    Ok((dashboard, query))
}

async fn index_handler(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Response {
    let page = load_dashboard(&state, &params)
        .await
        .and_then(|(dashboard, query)| {
            let mut html = String::with_capacity(8 * 1024 + dashboard.channels.len() * 1024);
            render::render_dashboard(&mut html, &dashboard, &query, state.refresh_secs)
                .map_err(PassError::Render)?;
            Ok(html)
        });

    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            e.log();
            (e.status(), Html(render::render_error(&e.message()))).into_response()
        }
    }
}

async fn dashboard_handler(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Response {
    match load_dashboard(&state, &params).await {
        Ok((dashboard, _)) => Json(dashboard).into_response(),
        Err(e) => {
            e.log();
            (e.status(), Json(serde_json::json!({ "error": e.message() }))).into_response()
        }
    }
}

async fn health_handler(State(state): State<AppState>) -> Response {
    let source = Arc::clone(&state.source);
    let result = tokio::task::spawn_blocking(move || source.ping())
        .await
        .map_err(|e| e.to_string())
        .and_then(|r| r.map_err(|e| e.to_string()));

    match result {
        Ok(()) => Json(serde_json::json!({ "status": "healthy" })).into_response(),
        Err(message) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "status": "unavailable", "error": message })),
        )
            .into_response(),
    }
}
