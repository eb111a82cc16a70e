//! # API Routes Module
//!
//! Configures HTTP routes for the service API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/metrics` - Prometheus metrics
//! * `/api/batch-mint` - Batch submission (admin)
//! * `/api/wallet/create` - Account creation (admin)
//! * `/api/webhooks/openfort` - Signed counterparty callbacks

pub mod batch_mint;
pub mod health;
pub mod metrics;
pub mod wallet;
pub mod webhooks;

use actix_web::web;
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .configure(metrics::init)
        .configure(batch_mint::init)
        .configure(wallet::init)
        .configure(webhooks::init);
}
