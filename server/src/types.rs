use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::index::VectorClient;
use crate::users::UserStore;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of URLs accepted in one index request.
pub const MAX_BATCH_URLS: usize = 10;

// ---------------------------------------------------------------------------
// Core types
// ---------------------------------------------------------------------------

/// A user record resolved from the user store. Only existence is checked by
/// the index handler; `id` is the canonical id forwarded downstream.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Wire types (camelCase field names on the wire)
// ---------------------------------------------------------------------------

/// Inbound body of `POST /api/index`.
#[derive(Deserialize)]
pub struct IndexRequest {
    pub urls: Vec<String>,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// One failed URL in the aggregated response.
#[derive(Clone, Debug, Serialize)]
pub struct FailedUrl {
    pub url: String,
    pub error: String,
}

/// Aggregated outcome of one index request.
#[derive(Serialize)]
pub struct IndexResponse {
    #[serde(rename = "successfulUrls")]
    pub successful_urls: Vec<String>,
    #[serde(rename = "failedUrls")]
    pub failed_urls: Vec<FailedUrl>,
}

// ---------------------------------------------------------------------------
// Axum application state
// ---------------------------------------------------------------------------

/// Shared handler state: the user store and the fan-out client.
#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UserStore>,
    pub vector: Arc<VectorClient>,
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Check that a string parses as an absolute `http`/`https` URL.
pub fn is_valid_url(candidate: &str) -> bool {
    match url::Url::parse(candidate) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_http_and_https() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/page?q=1"));
    }

    #[test]
    fn rejects_other_schemes_and_relative_paths() {
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url(""));
    }
}
