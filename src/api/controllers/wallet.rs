//! # Wallet Controller
//!
//! Pass-through to the counterparty's account creation.

use actix_web::{HttpRequest, HttpResponse};
use log::{error, info};

use crate::{
    api::controllers::parse_json_body,
    domain::CallbackHandler,
    models::{ApiError, ThinDataAppState, WalletCreateRequest, WalletCreateResponse},
    services::TransactionIntentClientTrait,
    utils::validate_api_key,
};

/// Creates a custodial account. An empty body uses the configured chain.
pub async fn create_wallet<C, H>(
    req: HttpRequest,
    body: &[u8],
    state: ThinDataAppState<C, H>,
) -> Result<HttpResponse, ApiError>
where
    C: TransactionIntentClientTrait + 'static,
    H: CallbackHandler + 'static,
{
    validate_api_key(&req, &state.api_key)?;

    let request: WalletCreateRequest = if body.iter().all(u8::is_ascii_whitespace) {
        WalletCreateRequest::default()
    } else {
        parse_json_body(body)?
    };
    let chain_id = request.chain_id.unwrap_or(state.default_chain_id);

    let account = state
        .intent_client
        .create_account(chain_id)
        .await
        .map_err(|e| {
            error!("Account creation failed: {}", e);
            ApiError::InternalError(e.safe_description().to_string())
        })?;

    info!("Created account {} on chain {}", account.id, account.chain_id);

    Ok(HttpResponse::Ok().json(WalletCreateResponse::from(account)))
}
