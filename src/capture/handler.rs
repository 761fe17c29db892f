use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, warn};

use crate::capture::record::CapturedRequest;
use crate::transport::http::AppState;

/// Catch-all handler: any method, any path not claimed by the dashboard.
///
/// Captures the request, appends it to history, mirrors it to live viewers,
/// and echoes the record back to the sender.
pub async fn capture_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let record = CapturedRequest::from_parts(&method, &uri, &headers, query, &body);
    debug!(method = %record.method, path = %record.path, "captured request");

    state.history.push(record.clone());

    let payload = match serde_json::to_string(&record) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("failed to serialize captured request: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "failed to serialize captured request" })),
            )
                .into_response();
        }
    };

    if let Err(e) = state.broadcaster.publish(payload.into()) {
        // The capture is already in history; only the live mirror is gone.
        warn!("live mirror unavailable: {e}");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "live stream is shut down" })),
        )
            .into_response();
    }

    Json(record).into_response()
}
