use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ApiError;

/// Body of `POST /api/batch-mint`.
///
/// Missing fields deserialize to empty values so that validation, not the JSON
/// extractor, decides what is reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BatchMintRequest {
    #[serde(default, alias = "accountId")]
    #[validate(length(min = 1))]
    pub account_handle: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub contract_address: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub recipients: Vec<String>,

    /// Optional caller token; send the same value when retrying the same batch.
    #[serde(default, alias = "idempotencyKey")]
    pub idempotency_token: Option<String>,
}

impl BatchMintRequest {
    pub fn validate_request(&self) -> Result<(), ApiError> {
        self.validate().map_err(|_| {
            ApiError::ValidationError(
                "Missing required fields: accountHandle, contractAddress, recipients".to_string(),
            )
        })
    }
}
