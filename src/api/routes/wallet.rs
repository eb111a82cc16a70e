//! This module defines the HTTP route for custodial account creation.

use crate::{api::controllers::wallet, models::DefaultAppState};
use actix_web::{post, web, HttpRequest, Responder};

/// Creates an account with the counterparty. Requires the admin API key.
#[post("/api/wallet/create")]
async fn create_wallet(
    req: HttpRequest,
    body: web::Bytes,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    wallet::create_wallet(req, &body, data).await
}

/// Initializes the routes for the wallet module.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create_wallet);
}
