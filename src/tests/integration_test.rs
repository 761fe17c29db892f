//! End-to-end scenario through the router: capture traffic is observed by
//! live subscriptions in publish order while history accumulates.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use crate::broadcaster::Broadcaster;
use crate::capture::record::CapturedRequest;
use crate::history::HistoryStore;
use crate::transport::http::{build_router, AppState};

async fn capture(app: &axum::Router, path: &str) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .body(Body::from("ping"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_success());
}

async fn next_path(subscription: &mut crate::broadcaster::Subscription) -> String {
    let event = subscription.recv().await.expect("live event");
    let record: CapturedRequest = serde_json::from_str(&event).unwrap();
    record.path
}

#[tokio::test]
async fn live_mirror_follows_capture_traffic() {
    let state = Arc::new(AppState {
        broadcaster: Broadcaster::start(8),
        history: HistoryStore::new(10),
    });
    let app = build_router(state.clone());

    // One early viewer sees the first capture alone.
    let mut early = state.broadcaster.subscribe().unwrap();
    capture(&app, "/hooks/a").await;
    assert_eq!(next_path(&mut early).await, "/hooks/a");

    // A viewer connecting later sees only subsequent captures.
    let mut late = state.broadcaster.subscribe().unwrap();
    capture(&app, "/hooks/b").await;
    assert_eq!(next_path(&mut early).await, "/hooks/b");
    assert_eq!(next_path(&mut late).await, "/hooks/b");

    // After the early viewer unsubscribes, traffic reaches only the other.
    state.broadcaster.unsubscribe(early.id());
    capture(&app, "/hooks/c").await;
    assert_eq!(next_path(&mut late).await, "/hooks/c");
    assert_eq!(early.recv().await, None);

    // History kept every capture regardless of who was watching.
    assert_eq!(state.history.len(), 3);
    let recent = state.history.recent();
    assert_eq!(recent[0].path, "/hooks/c");
    assert_eq!(recent[2].path, "/hooks/a");
}
