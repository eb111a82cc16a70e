//! Inbound lifecycle events delivered by the counterparty's webhook.
use serde::Deserialize;
use strum::Display;
use thiserror::Error;

use crate::constants::{
    EVENT_TRANSACTION_INTENT_FAILED, EVENT_TRANSACTION_INTENT_PENDING,
    EVENT_TRANSACTION_INTENT_SUCCEEDED,
};

#[derive(Error, Debug, PartialEq)]
pub enum CallbackParseError {
    #[error("Callback body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Callback event {0} is missing data.id")]
    MissingSubjectId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CallbackEventType {
    Pending,
    Succeeded,
    Failed,
    Unknown,
}

impl CallbackEventType {
    pub fn from_event_name(name: &str) -> Self {
        match name {
            EVENT_TRANSACTION_INTENT_SUCCEEDED => CallbackEventType::Succeeded,
            EVENT_TRANSACTION_INTENT_FAILED => CallbackEventType::Failed,
            EVENT_TRANSACTION_INTENT_PENDING => CallbackEventType::Pending,
            _ => CallbackEventType::Unknown,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CallbackEnvelope {
    #[serde(rename = "type")]
    event_type: String,
    #[serde(default)]
    data: Option<CallbackEnvelopeData>,
}

#[derive(Debug, Deserialize)]
struct CallbackEnvelopeData {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// An authenticated callback event. Owned by the dispatcher for the duration
/// of one delivery; never persisted here.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackEvent {
    pub event_type: CallbackEventType,
    /// The `type` string exactly as delivered, kept for observability.
    pub raw_type: String,
    /// Empty only for unrecognized event types that carry no id.
    pub subject_id: String,
    pub error: Option<String>,
    pub raw_payload: Vec<u8>,
}

impl CallbackEvent {
    /// Parses the raw webhook body. Must only be called on bytes that already
    /// passed signature verification.
    pub fn from_payload(payload: &[u8]) -> Result<Self, CallbackParseError> {
        let envelope: CallbackEnvelope = serde_json::from_slice(payload)
            .map_err(|e| CallbackParseError::InvalidJson(e.to_string()))?;

        let event_type = CallbackEventType::from_event_name(&envelope.event_type);
        let (subject_id, error) = match envelope.data {
            Some(data) => (
                data.id.unwrap_or_default(),
                data.error.map(|value| match value {
                    serde_json::Value::String(message) => message,
                    other => other.to_string(),
                }),
            ),
            None => (String::new(), None),
        };

        if event_type != CallbackEventType::Unknown && subject_id.trim().is_empty() {
            return Err(CallbackParseError::MissingSubjectId(envelope.event_type));
        }

        Ok(Self {
            event_type,
            raw_type: envelope.event_type,
            subject_id,
            error,
            raw_payload: payload.to_vec(),
        })
    }
}
