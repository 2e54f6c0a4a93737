use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::linkcheck::Classification;

/// Batch validation request. `urls` is optional so a missing or `null` field
/// behaves like an empty batch instead of a deserialization failure, and the
/// elements are raw JSON values so one non-string entry cannot sink the call.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateUrlsRequest {
    #[serde(default)]
    pub urls: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateUrlsResponse {
    pub all_safe: bool,
    pub results: Vec<Classification>,
}
