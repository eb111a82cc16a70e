//! # Webhook Controller
//!
//! Authenticates counterparty callbacks against the raw request body and
//! hands them to the dispatcher. Payloads are never echoed in logs or
//! responses.

use actix_web::{HttpRequest, HttpResponse};
use log::{debug, warn};

use crate::{
    constants::WEBHOOK_SIGNATURE_HEADER_NAME,
    domain::{signature, CallbackHandler},
    metrics::SIGNATURE_FAILURES,
    models::{ApiError, CallbackEvent, ThinDataAppState, WebhookAck},
    services::TransactionIntentClientTrait,
};

/// Receives an Openfort webhook delivery.
///
/// # Returns
///
/// * `200 {"received": true}` once the event is dispatched, including
///   unrecognized event types and collaborator failures.
/// * `401` when the signature is missing or does not match; nothing is dispatched.
/// * `400` when an authenticated body is not a well-formed event.
pub async fn receive_openfort_webhook<C, H>(
    req: HttpRequest,
    body: &[u8],
    state: ThinDataAppState<C, H>,
) -> Result<HttpResponse, ApiError>
where
    C: TransactionIntentClientTrait + 'static,
    H: CallbackHandler + 'static,
{
    let presented = req
        .headers()
        .get(WEBHOOK_SIGNATURE_HEADER_NAME)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if !signature::verify(body, presented, state.webhook_secret_bytes()) {
        SIGNATURE_FAILURES.inc();
        warn!(
            "Rejected webhook delivery ({} bytes): missing or invalid signature",
            body.len()
        );
        return Err(ApiError::AuthenticationFailure(
            "Invalid webhook signature".to_string(),
        ));
    }

    let event = CallbackEvent::from_payload(body).map_err(|e| {
        warn!("Rejected authenticated webhook delivery: {}", e);
        ApiError::ValidationError("Invalid webhook payload".to_string())
    })?;

    let outcome = state.callback_dispatcher.dispatch(&event).await;
    debug!(
        "Webhook {} for {} dispatched: {}",
        event.raw_type, event.subject_id, outcome
    );

    Ok(HttpResponse::Ok().json(WebhookAck::received()))
}
