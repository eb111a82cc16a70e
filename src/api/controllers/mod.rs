//! # API Controllers Module
//!
//! Handles HTTP endpoints for the service:
//!
//! * `batch_mint` - Idempotent batch submission
//! * `wallet` - Custodial account creation
//! * `webhook` - Signed lifecycle callbacks from the counterparty

pub mod batch_mint;
pub mod wallet;
pub mod webhook;

use serde::de::DeserializeOwned;

use crate::models::ApiError;

/// Deserializes a JSON request body, reporting malformed input as a
/// validation error. Controllers parse bodies themselves so that the
/// authentication check always runs before body validation.
pub(crate) fn parse_json_body<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body)
        .map_err(|e| ApiError::ValidationError(format!("Invalid request body: {}", e)))
}
