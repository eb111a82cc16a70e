//! Application state initialization
//!
//! Constructs the counterparty client selected by configuration and wires the
//! submission and callback services around it.
use crate::{
    config::ServerConfig,
    domain::LoggingCallbackHandler,
    models::{AppState, DefaultAppState},
    services::TransactionIntentClientImpl,
};
use actix_web::web;
use color_eyre::Result;
use eyre::WrapErr;
use log::{info, warn};
use std::sync::Arc;

/// Initializes application state
///
/// # Returns
///
/// * `Result<web::ThinData<DefaultAppState>>` - Initialized application state
///
/// # Errors
///
/// Returns error if the counterparty client cannot be constructed.
pub async fn initialize_app_state(
    server_config: Arc<ServerConfig>,
) -> Result<web::ThinData<DefaultAppState>> {
    let intent_client = TransactionIntentClientImpl::from_config(&server_config)
        .wrap_err("Failed to initialize counterparty client")?;
    info!(
        "Counterparty mode {:?}, chain {}",
        server_config.counterparty_mode, server_config.chain_id
    );

    if server_config.webhook_secret.is_none() {
        warn!("OPENFORT_WEBHOOK_SECRET is not set, every webhook delivery will be rejected");
    }

    let app_state = web::ThinData(AppState::new(
        &server_config,
        Arc::new(intent_client),
        Arc::new(LoggingCallbackHandler),
    ));

    Ok(app_state)
}
