use std::collections::HashMap;

use axum::http::{HeaderMap, HeaderValue, Method, Uri};

use super::record::CapturedRequest;

fn github_query() -> HashMap<String, String> {
    HashMap::from([("ref".to_string(), "main".to_string())])
}

#[test]
fn from_parts_captures_every_field() {
    let uri: Uri = "/hooks/github?ref=main".parse().unwrap();
    let mut headers = HeaderMap::new();
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers.insert("x-github-event", HeaderValue::from_static("push"));

    let record = CapturedRequest::from_parts(
        &Method::POST,
        &uri,
        &headers,
        github_query(),
        br#"{"zen":"keep it logically awesome"}"#,
    );

    assert_eq!(record.method, "POST");
    assert_eq!(record.url, "/hooks/github?ref=main");
    assert_eq!(record.path, "/hooks/github");
    assert_eq!(
        record.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        record.headers.get("x-github-event").map(String::as_str),
        Some("push")
    );
    assert_eq!(record.query.get("ref").map(String::as_str), Some("main"));
    assert_eq!(record.body, r#"{"zen":"keep it logically awesome"}"#);
    assert!(record.timestamp > 0);
}

#[test]
fn from_parts_replaces_invalid_utf8_in_body() {
    let uri: Uri = "/binary".parse().unwrap();
    let record = CapturedRequest::from_parts(
        &Method::PUT,
        &uri,
        &HeaderMap::new(),
        HashMap::new(),
        &[0xff, 0xfe, b'o', b'k'],
    );

    assert!(record.body.ends_with("ok"));
    assert!(record.body.contains('\u{fffd}'));
}

#[test]
fn record_round_trips_through_json() {
    let uri: Uri = "/hooks/github?ref=main".parse().unwrap();
    let record = CapturedRequest::from_parts(
        &Method::POST,
        &uri,
        &HeaderMap::new(),
        github_query(),
        b"payload",
    );

    let json = serde_json::to_string(&record).unwrap();
    let parsed: CapturedRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.method, record.method);
    assert_eq!(parsed.url, record.url);
    assert_eq!(parsed.path, record.path);
    assert_eq!(parsed.query, record.query);
    assert_eq!(parsed.body, record.body);
    assert_eq!(parsed.timestamp, record.timestamp);
}
