//! # Services Module
//!
//! External integrations. The only counterparty is Openfort, which files
//! transaction intents and reports their lifecycle through webhooks.

mod openfort;
pub use openfort::*;
