//! # Batch Mint Controller
//!
//! Validates the admin request and files the batch with the counterparty.
//! A retried batch must carry the same `idempotencyToken`; the repeat is
//! answered with `409 DUPLICATE_REQUEST` instead of a second transaction.

use actix_web::{HttpRequest, HttpResponse};

use crate::{
    api::controllers::parse_json_body,
    domain::CallbackHandler,
    models::{ApiError, BatchMintRequest, ThinDataAppState},
    services::TransactionIntentClientTrait,
    utils::validate_api_key,
};

/// Submits a batch mint.
///
/// # Returns
///
/// `200` with `{ transactionId, state, idempotencyToken, itemCount }`.
pub async fn submit_batch_mint<C, H>(
    req: HttpRequest,
    body: &[u8],
    state: ThinDataAppState<C, H>,
) -> Result<HttpResponse, ApiError>
where
    C: TransactionIntentClientTrait + 'static,
    H: CallbackHandler + 'static,
{
    validate_api_key(&req, &state.api_key)?;

    let request: BatchMintRequest = parse_json_body(body)?;
    request.validate_request()?;

    let result = state.batch_mint_service.submit_batch(request).await?;

    Ok(HttpResponse::Ok().json(result))
}
