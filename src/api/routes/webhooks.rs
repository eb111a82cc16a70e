//! This module defines the HTTP route receiving counterparty webhooks.
//!
//! The body is taken as raw bytes: the signature covers the exact wire form.

use crate::{api::controllers::webhook, models::DefaultAppState};
use actix_web::{post, web, HttpRequest, Responder};

/// Receives a signed Openfort webhook. Authenticated by signature, not API key.
#[post("/api/webhooks/openfort")]
async fn openfort_webhook(
    req: HttpRequest,
    body: web::Bytes,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    webhook::receive_openfort_webhook(req, &body, data).await
}

/// Initializes the routes for the webhooks module.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(openfort_webhook);
}
