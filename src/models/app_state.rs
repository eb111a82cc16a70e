//! Shared application state handed to every route.
use std::{sync::Arc, time::Duration};

use actix_web::web::ThinData;

use crate::{
    config::ServerConfig,
    domain::{BatchMintService, CallbackDispatcher, CallbackHandler, LoggingCallbackHandler},
    models::SecretString,
    services::{TransactionIntentClientImpl, TransactionIntentClientTrait},
};

/// Services are constructed once at bootstrap and shared by `Arc` handle.
pub struct AppState<C, H>
where
    C: TransactionIntentClientTrait,
    H: CallbackHandler,
{
    pub batch_mint_service: Arc<BatchMintService<C>>,
    pub intent_client: Arc<C>,
    pub callback_dispatcher: Arc<CallbackDispatcher<H>>,
    /// `None` makes every webhook delivery fail verification.
    pub webhook_secret: Option<SecretString>,
    pub api_key: SecretString,
    pub default_chain_id: u64,
}

impl<C, H> Clone for AppState<C, H>
where
    C: TransactionIntentClientTrait,
    H: CallbackHandler,
{
    fn clone(&self) -> Self {
        Self {
            batch_mint_service: Arc::clone(&self.batch_mint_service),
            intent_client: Arc::clone(&self.intent_client),
            callback_dispatcher: Arc::clone(&self.callback_dispatcher),
            webhook_secret: self.webhook_secret.clone(),
            api_key: self.api_key.clone(),
            default_chain_id: self.default_chain_id,
        }
    }
}

impl<C, H> AppState<C, H>
where
    C: TransactionIntentClientTrait,
    H: CallbackHandler,
{
    pub fn new(config: &ServerConfig, intent_client: Arc<C>, callback_handler: Arc<H>) -> Self {
        let batch_mint_service = BatchMintService::new(
            Arc::clone(&intent_client),
            config.chain_id,
            config.policy_id.clone(),
            Duration::from_secs(config.submission_timeout_seconds),
        );

        Self {
            batch_mint_service: Arc::new(batch_mint_service),
            intent_client,
            callback_dispatcher: Arc::new(CallbackDispatcher::new(callback_handler)),
            webhook_secret: config.webhook_secret.clone(),
            api_key: config.api_key.clone(),
            default_chain_id: config.chain_id,
        }
    }

    /// Secret bytes for webhook verification; empty when unconfigured.
    pub fn webhook_secret_bytes(&self) -> &[u8] {
        self.webhook_secret
            .as_ref()
            .map(|secret| secret.as_bytes())
            .unwrap_or_default()
    }
}

pub type DefaultAppState = AppState<TransactionIntentClientImpl, LoggingCallbackHandler>;

pub type ThinDataAppState<C, H> = ThinData<AppState<C, H>>;
