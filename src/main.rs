//! Batch mint relayer service.
//!
//! Exposes the admin batch mint and wallet endpoints, the signed Openfort
//! webhook and the health and metrics endpoints.
//!
//! Configuration is read from the environment (a `.env` file is honoured).
//! See `config::ServerConfig` for the recognised variables.
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{middleware, App, HttpServer};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use batch_mint_relayer::{
    api::{middleware::TimeoutMiddleware, routes::configure_routes},
    bootstrap::initialize_app_state,
    config::ServerConfig,
    constants::DEFAULT_SHUTDOWN_TIMEOUT_SECONDS,
    logging::setup_logging,
    metrics::metrics_middleware::MetricsMiddleware,
};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Load environment variables from .env file
    dotenv().ok();

    setup_logging()?;

    let config = Arc::new(ServerConfig::from_env().wrap_err("Failed to load configuration")?);

    let app_state = initialize_app_state(config.clone()).await?;
    let request_timeout_seconds = config.request_timeout_seconds;

    info!("Starting server on {}:{}", config.host, config.port);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TimeoutMiddleware::new(request_timeout_seconds))
            .wrap(MetricsMiddleware)
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .shutdown_timeout(DEFAULT_SHUTDOWN_TIMEOUT_SECONDS);

    info!("Server running at http://{}:{}", config.host, config.port);

    server.run().await?;
    Ok(())
}
