use axum::{Json, extract::State};
use serde_json::Value;

use crate::{
    app_state::AppState,
    linkcheck::{
        Classification, Reason, UrlClassifier,
        dtos::{ValidateUrlsRequest, ValidateUrlsResponse},
    },
};

#[utoipa::path(
    post,
    path = "/api/validate-urls",
    tag = "linkcheck",
    request_body = ValidateUrlsRequest,
    responses(
        (status = 200, description = "Per-URL verdicts", body = ValidateUrlsResponse)
    )
)]
pub async fn validate_urls(
    State(state): State<AppState>,
    Json(payload): Json<ValidateUrlsRequest>,
) -> Json<ValidateUrlsResponse> {
    let values = payload.urls.unwrap_or_default();
    let results: Vec<Classification> = values
        .iter()
        .map(|value| classify_value(&state.classifier, value))
        .collect();
    let all_safe = results.iter().all(|r| r.safe);

    Json(ValidateUrlsResponse { all_safe, results })
}

/// Non-string elements are reported as malformed, keyed by their JSON
/// rendering, instead of failing the whole batch.
fn classify_value(classifier: &UrlClassifier, value: &Value) -> Classification {
    match value.as_str() {
        Some(url) => classifier.classify(url),
        None => Classification::rejected(value.to_string(), Reason::Malformed),
    }
}
