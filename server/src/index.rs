//! Fan-out client for the vector backend.
//!
//! One inbound index request becomes one outbound `POST` per URL, all issued
//! concurrently. The join waits for every request to settle: a single URL's
//! failure is captured as a value and never aborts its siblings. No retries,
//! no per-request timeout beyond the client default.

use futures_util::future::join_all;
use reqwest::header::AUTHORIZATION;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::config::Config;

/// Why one URL's downstream call failed. The `Display` text is what ends up
/// in the `failedUrls` response entries.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Index Url Error! status: {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Per-URL outcome. Produced once during the fan-out, read once during
/// aggregation.
pub enum IndexOutcome {
    Success {
        url: String,
        result: serde_json::Value,
    },
    Failure {
        url: String,
        error: String,
    },
}

/// Client for the vector backend's callback endpoint.
pub struct VectorClient {
    http: reqwest::Client,
    callback_url: String,
    api_token: String,
}

impl VectorClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            callback_url: config.callback_url(),
            api_token: config.api_token.clone(),
        }
    }

    /// POST one URL to the backend and decode the JSON reply.
    async fn index_one(
        &self,
        url: &str,
        user_id: &str,
    ) -> Result<serde_json::Value, IndexError> {
        let response = self
            .http
            .post(&self.callback_url)
            .header(AUTHORIZATION, self.api_token.as_str())
            .json(&json!({ "url": url, "userId": user_id }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IndexError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Index a batch of URLs concurrently and wait for all of them.
    ///
    /// Outcome order matches input order — `join_all` preserves the
    /// index-to-result correspondence regardless of completion timing.
    pub async fn index_batch(&self, urls: &[String], user_id: &str) -> Vec<IndexOutcome> {
        let requests = urls.iter().map(|url| async move {
            match self.index_one(url, user_id).await {
                Ok(result) => IndexOutcome::Success { url: url.clone(), result },
                Err(err) => {
                    error!(
                        service = "index-url",
                        action = "error-index-url",
                        url = url.as_str(),
                        user_id = user_id,
                        error = %err,
                        "Failed to index URL"
                    );
                    IndexOutcome::Failure { url: url.clone(), error: err.to_string() }
                }
            }
        });

        join_all(requests).await
    }
}
