//! Openfort counterparty integration.
//!
//! The counterparty files transaction intents, enforces idempotency token
//! uniqueness and later reports lifecycle changes through the webhook.
//! Two implementations are available: the HTTP client for the real API and
//! an in-process stand-in selected with `COUNTERPARTY_MODE=in_memory`.
mod client;
pub use client::*;

mod error;
pub use error::*;

mod in_memory;
pub use in_memory::*;

mod types;
pub use types::*;

use async_trait::async_trait;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::{
    config::{CounterpartyMode, ServerConfig},
    models::Account,
};

#[async_trait]
#[cfg_attr(test, automock)]
pub trait TransactionIntentClientTrait: Send + Sync {
    /// Files one transaction intent. Fails with
    /// [`OpenfortError::IdempotencyKeyInUse`] when the request's token was
    /// already accepted.
    async fn create_transaction_intent(
        &self,
        request: CreateTransactionIntentRequest,
    ) -> OpenfortResult<TransactionIntent>;

    async fn create_account(&self, chain_id: u64) -> OpenfortResult<Account>;
}

/// Counterparty implementation chosen at startup.
#[derive(Debug)]
pub enum TransactionIntentClientImpl {
    Openfort(OpenfortClient),
    InMemory(InMemoryTransactionIntentClient),
}

impl TransactionIntentClientImpl {
    pub fn from_config(config: &ServerConfig) -> OpenfortResult<Self> {
        match config.counterparty_mode {
            CounterpartyMode::Openfort => {
                let secret_key = config.openfort_secret_key.clone().ok_or_else(|| {
                    OpenfortError::ConfigError("OPENFORT_SECRET_KEY is not set".to_string())
                })?;
                Ok(Self::Openfort(OpenfortClient::new(
                    &config.openfort_api_url,
                    secret_key,
                )?))
            }
            CounterpartyMode::InMemory => Ok(Self::new_in_memory(Duration::from_secs(
                config.idempotency_retention_seconds,
            ))),
        }
    }

    pub fn new_in_memory(retention: Duration) -> Self {
        Self::InMemory(InMemoryTransactionIntentClient::new(retention))
    }
}

#[async_trait]
impl TransactionIntentClientTrait for TransactionIntentClientImpl {
    async fn create_transaction_intent(
        &self,
        request: CreateTransactionIntentRequest,
    ) -> OpenfortResult<TransactionIntent> {
        match self {
            TransactionIntentClientImpl::Openfort(client) => {
                client.create_transaction_intent(request).await
            }
            TransactionIntentClientImpl::InMemory(client) => {
                client.create_transaction_intent(request).await
            }
        }
    }

    async fn create_account(&self, chain_id: u64) -> OpenfortResult<Account> {
        match self {
            TransactionIntentClientImpl::Openfort(client) => client.create_account(chain_id).await,
            TransactionIntentClientImpl::InMemory(client) => client.create_account(chain_id).await,
        }
    }
}
