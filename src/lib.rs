//! Batch mint relayer
//!
//! Files idempotent batch mint transactions with the Openfort custodial API
//! and consumes the signed webhooks reporting their lifecycle.
//!
//! ## Modules
//!
//! * `api` - HTTP routes, controllers and middleware
//! * `bootstrap` - Application state construction
//! * `config` - Environment-based configuration
//! * `constants` - Shared constants
//! * `domain` - Idempotent submission and callback dispatch
//! * `logging` - Logger setup
//! * `metrics` - Prometheus registry
//! * `models` - Request, response and error types
//! * `services` - Counterparty clients
//! * `utils` - Authentication helpers

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod utils;
