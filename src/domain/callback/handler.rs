//! Collaborator invoked for each authenticated lifecycle event.
use async_trait::async_trait;
use log::{error, info};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::models::CallbackEvent;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallbackHandlerError {
    #[error("Callback collaborator failed: {0}")]
    Collaborator(String),
}

/// Receives lifecycle events after signature verification. Implementations
/// may be invoked concurrently, including for the same subject id, and own
/// any delivery deduplication they need.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait CallbackHandler: Send + Sync {
    async fn on_succeeded(&self, event: &CallbackEvent) -> Result<(), CallbackHandlerError>;

    /// `event.error` carries the counterparty's failure reason when present.
    async fn on_failed(&self, event: &CallbackEvent) -> Result<(), CallbackHandlerError>;

    async fn on_pending(&self, event: &CallbackEvent) -> Result<(), CallbackHandlerError>;
}

/// Default collaborator: records each transition in the service log.
#[derive(Debug, Clone, Default)]
pub struct LoggingCallbackHandler;

#[async_trait]
impl CallbackHandler for LoggingCallbackHandler {
    async fn on_succeeded(&self, event: &CallbackEvent) -> Result<(), CallbackHandlerError> {
        info!("Transaction intent {} succeeded", event.subject_id);
        Ok(())
    }

    async fn on_failed(&self, event: &CallbackEvent) -> Result<(), CallbackHandlerError> {
        error!(
            "Transaction intent {} failed: {}",
            event.subject_id,
            event.error.as_deref().unwrap_or("no reason given")
        );
        Ok(())
    }

    async fn on_pending(&self, event: &CallbackEvent) -> Result<(), CallbackHandlerError> {
        info!("Transaction intent {} is pending", event.subject_id);
        Ok(())
    }
}
