use std::collections::HashMap;

use axum::http::{HeaderMap, Method, Uri};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One captured inbound request.
///
/// This is the record appended to history, echoed back to the sender, and
/// (serialized to JSON) the opaque event payload mirrored to viewers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedRequest {
    /// Capture time, unix milliseconds.
    pub timestamp: i64,
    pub method: String,
    /// The request target as received, including the query string.
    pub url: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub query: HashMap<String, String>,
    /// Raw body text; bytes that are not valid UTF-8 are replaced lossily.
    pub body: String,
}

impl CapturedRequest {
    /// Builds a record from the parts of an inbound request.
    ///
    /// When a header appears more than once the last value wins.
    pub fn from_parts(
        method: &Method,
        uri: &Uri,
        headers: &HeaderMap,
        query: HashMap<String, String>,
        body: &[u8],
    ) -> Self {
        let mut captured_headers = HashMap::new();
        for (name, value) in headers {
            captured_headers.insert(
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }

        Self {
            timestamp: Utc::now().timestamp_millis(),
            method: method.to_string(),
            url: uri.to_string(),
            path: uri.path().to_string(),
            headers: captured_headers,
            query,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}
