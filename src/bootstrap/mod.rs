//! Initialization routines for the service
//!
//! # Submodules
//!
//! - `initialize_app_state`: Builds the counterparty client and the shared application state
mod initialize_app_state;
pub use initialize_app_state::*;
