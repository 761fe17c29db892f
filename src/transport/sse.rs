use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use async_stream::stream;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use futures_util::Stream;
use tracing::debug;

use crate::transport::http::AppState;

const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// GET /__dashboard__/sse — stream captured requests to one viewer.
///
/// Each broadcast event becomes one SSE `message` carrying the JSON record.
/// The subscription lives inside the stream, so when the client disconnects
/// and axum drops the stream, the viewer is deregistered from the
/// broadcaster; when the broadcaster shuts down, `recv` returns `None` and
/// the stream ends cleanly.
pub async fn sse_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Sse<impl Stream<Item = Result<SseEvent, Infallible>>>, StatusCode> {
    let mut subscription = state
        .broadcaster
        .subscribe()
        .map_err(|_| StatusCode::SERVICE_UNAVAILABLE)?;

    let events = stream! {
        while let Some(event) = subscription.recv().await {
            yield Ok(SseEvent::default().event("message").data(event.as_ref()));
        }
        debug!(id = %subscription.id(), "subscription ended, closing event stream");
    };

    Ok(Sse::new(events).keep_alive(
        KeepAlive::new()
            .interval(KEEP_ALIVE_INTERVAL)
            .text("keep-alive"),
    ))
}
