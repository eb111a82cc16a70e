//! Shared fixtures: application wiring and request helpers.
use std::sync::Arc;

use actix_web::web;
use batch_mint_relayer::{
    config::{CounterpartyMode, ServerConfig},
    domain::{signature, LoggingCallbackHandler},
    models::{AppState, DefaultAppState, SecretString},
    services::TransactionIntentClientImpl,
};

pub const API_KEY: &str = "integration-admin-key";
pub const WEBHOOK_SECRET: &str = "whsec_integration";

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_key: SecretString::new(API_KEY),
        counterparty_mode: CounterpartyMode::InMemory,
        openfort_secret_key: None,
        openfort_api_url: "http://localhost".to_string(),
        chain_id: 80002,
        policy_id: Some("pol_integration".to_string()),
        webhook_secret: Some(SecretString::new(WEBHOOK_SECRET)),
        submission_timeout_seconds: 5,
        request_timeout_seconds: 10,
        idempotency_retention_seconds: 3600,
    }
}

pub fn app_state() -> web::ThinData<DefaultAppState> {
    let config = test_config();
    let client = TransactionIntentClientImpl::from_config(&config)
        .expect("in-memory client never fails to build");

    web::ThinData(AppState::new(
        &config,
        Arc::new(client),
        Arc::new(LoggingCallbackHandler),
    ))
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", API_KEY))
}

pub fn sign(payload: &[u8]) -> String {
    signature::sign(payload, WEBHOOK_SECRET.as_bytes()).expect("secret is configured")
}
