//! Wire types for the counterparty's transaction intent and account APIs.
use serde::{Deserialize, Serialize};

use crate::models::{InteractionArgument, InteractionDescriptor};

/// Body of `POST /v1/transaction_intents`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionIntentRequest {
    pub account: String,
    pub chain_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    pub interactions: Vec<IntentInteraction>,
    /// Sent as a header, not in the body.
    #[serde(skip)]
    pub idempotency_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentInteraction {
    pub contract: String,
    pub function_name: String,
    pub function_args: Vec<InteractionArgument>,
}

impl From<&InteractionDescriptor> for IntentInteraction {
    fn from(descriptor: &InteractionDescriptor) -> Self {
        Self {
            contract: descriptor.contract.clone(),
            function_name: descriptor.operation.clone(),
            function_args: descriptor.arguments.clone(),
        }
    }
}

/// Transaction intent as returned by the counterparty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionIntent {
    pub id: String,
    /// Left loosely typed: only a string state is interpreted, anything else
    /// is treated as a freshly created (pending) intent.
    #[serde(default)]
    pub state: Option<serde_json::Value>,
}

impl TransactionIntent {
    pub fn state_label(&self) -> Option<&str> {
        self.state.as_ref().and_then(|value| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub chain_id: u64,
}
