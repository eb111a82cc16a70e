//! This module defines the HTTP route for batch minting.

use crate::{api::controllers::batch_mint, models::DefaultAppState};
use actix_web::{post, web, HttpRequest, Responder};

/// Files a batch mint. Requires the admin API key.
#[post("/api/batch-mint")]
async fn submit_batch_mint(
    req: HttpRequest,
    body: web::Bytes,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    batch_mint::submit_batch_mint(req, &body, data).await
}

/// Initializes the routes for the batch mint module.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_batch_mint);
}
