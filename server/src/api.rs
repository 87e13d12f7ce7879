use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::error;

use crate::index::IndexOutcome;
use crate::types::*;

type ApiError = (StatusCode, Json<serde_json::Value>);

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

pub async fn api_health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// Index batch
// ---------------------------------------------------------------------------

/// `POST /api/index` — validate a batch of URLs, authorize the submitting
/// user, fan the batch out to the vector backend, and aggregate the per-URL
/// outcomes.
///
/// The body is decoded inside the handler so a malformed payload (bad JSON,
/// missing `urls` or `userId`) surfaces as a 500 with the raw decode error,
/// matching the established wire contract.
pub async fn api_index(
    State(ctx): State<AppContext>,
    body: String,
) -> Result<Json<IndexResponse>, ApiError> {
    let request: IndexRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            error!(error = %err, "Index request failed");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            ));
        }
    };

    let invalid_urls: Vec<&String> =
        request.urls.iter().filter(|url| !is_valid_url(url)).collect();
    if !invalid_urls.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Please enter valid URLs, they should start with http:// or https://.",
                "invalidUrls": invalid_urls,
            })),
        ));
    }

    // TODO: authenticate the caller as `userId` once the trust boundary is
    // decided — today any caller may submit on behalf of any known user.
    let user = match ctx.users.get_user_by_id(&request.user_id).await {
        Some(user) => user,
        None => {
            return Err((StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" }))));
        }
    };

    // Cap check runs after the user lookup — an oversized request from a
    // known user is a 400, from an unknown user a 401.
    if request.urls.len() > MAX_BATCH_URLS {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "The maximum number of webpages indexed at one time is 10",
            })),
        ));
    }

    let outcomes = ctx.vector.index_batch(&request.urls, &user.id).await;

    let mut successful_urls = Vec::new();
    let mut failed_urls = Vec::new();
    for outcome in outcomes {
        match outcome {
            IndexOutcome::Success { url, .. } => successful_urls.push(url),
            IndexOutcome::Failure { url, error } => {
                failed_urls.push(FailedUrl { url, error })
            }
        }
    }

    if successful_urls.is_empty() {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "All URL requests failed" })),
        ));
    }

    Ok(Json(IndexResponse { successful_urls, failed_urls }))
}
