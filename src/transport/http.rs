use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::broadcaster::Broadcaster;
use crate::capture::handler::capture_handler;
use crate::history::HistoryStore;
use crate::transport::sse::sse_handler;

static DASHBOARD_HTML: &str = include_str!("../../templates/dashboard.html");

/// Shared state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    pub broadcaster: Broadcaster,
    pub history: HistoryStore,
}

/// Assembles the full router.
///
/// The dashboard routes are registered explicitly; everything else falls
/// through to the capture handler, whatever its method or path.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/__dashboard__", get(dashboard_handler))
        .route("/__dashboard__/sse", get(sse_handler))
        .route("/__dashboard__/requests", get(requests_handler))
        .route("/__dashboard__/health", get(health_handler))
        .fallback(capture_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves until ctrl-c.
///
/// On shutdown the broadcaster is closed first, which ends every live
/// viewer stream and lets the open SSE connections drain.
pub async fn serve(addr: &str, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");

    let app = build_router(state.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
}

async fn shutdown_signal(state: Arc<AppState>) {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received, closing live streams");
    state.broadcaster.shutdown();
}

/// GET /__dashboard__ — the embedded viewer page.
async fn dashboard_handler() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// GET /__dashboard__/requests — retained history, newest first, plus the
/// current viewer count.
async fn requests_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let subscribers = state.broadcaster.subscriber_count().await.unwrap_or(0);
    Json(json!({
        "requests": state.history.recent(),
        "subscribers": subscribers,
    }))
}

/// GET /__dashboard__/health — liveness probe.
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
