//! Submission data model: the request filed with the counterparty, the
//! per-recipient interaction descriptors, and the result handed back to callers.
mod request;
pub use request::*;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::models::SubmissionError;

/// Lifecycle state of a transaction intent as observed at submission time.
/// The counterparty owns the authoritative state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionState {
    Pending,
    Succeeded,
    Failed,
}

impl TransactionState {
    /// Interprets the counterparty's state string. Anything not clearly
    /// terminal is reported as pending, since a freshly filed intent is.
    pub fn from_counterparty(state: Option<&str>) -> Self {
        match state.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("succeeded") | Some("success") | Some("completed") | Some("confirmed") => {
                TransactionState::Succeeded
            }
            Some("failed") | Some("failure") | Some("reverted") | Some("rejected") => {
                TransactionState::Failed
            }
            _ => TransactionState::Pending,
        }
    }
}

/// A single argument of a contract call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InteractionArgument {
    Address(String),
    Uint(u64),
}

/// One contract call inside a transaction intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionDescriptor {
    pub contract: String,
    pub operation: String,
    pub arguments: Vec<InteractionArgument>,
}

impl InteractionDescriptor {
    /// The 1-based sequence argument, when the descriptor carries one.
    pub fn sequence(&self) -> Option<u64> {
        self.arguments.iter().find_map(|arg| match arg {
            InteractionArgument::Uint(value) => Some(*value),
            InteractionArgument::Address(_) => None,
        })
    }
}

/// A validated batch submission ready to be expanded and filed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub account_handle: String,
    pub target_contract: String,
    pub items: Vec<String>,
    pub idempotency_token: String,
}

impl SubmissionRequest {
    pub fn new(
        account_handle: impl Into<String>,
        target_contract: impl Into<String>,
        items: Vec<String>,
        idempotency_token: impl Into<String>,
    ) -> Result<Self, SubmissionError> {
        let request = Self {
            account_handle: account_handle.into(),
            target_contract: target_contract.into(),
            items,
            idempotency_token: idempotency_token.into(),
        };

        if request.account_handle.trim().is_empty()
            || request.target_contract.trim().is_empty()
            || request.items.is_empty()
        {
            return Err(SubmissionError::Validation(
                "Missing required fields: accountHandle, contractAddress, recipients".to_string(),
            ));
        }
        if request.idempotency_token.trim().is_empty() {
            return Err(SubmissionError::Validation(
                "Idempotency token must not be empty".to_string(),
            ));
        }

        Ok(request)
    }
}

/// Outcome of an accepted submission. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub transaction_id: String,
    pub state: TransactionState,
    pub idempotency_token: String,
    pub item_count: usize,
}
