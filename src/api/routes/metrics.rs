//! This module exposes the Prometheus registry over HTTP.
//!
//! # Endpoints
//!
//! - `/metrics`: All registered metrics in the Prometheus text exposition format.

use crate::metrics::gather_metrics;
use actix_web::{get, web, HttpResponse, Responder};
use log::error;

#[get("/metrics")]
async fn scrape_metrics() -> impl Responder {
    match gather_metrics() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(e) => {
            error!("Failed to gather metrics: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Initializes the routes for the metrics module.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(scrape_metrics);
}
