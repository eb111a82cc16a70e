//! # Domain Module
//!
//! Core logic of the service:
//!
//! * Idempotent batch submission to the counterparty
//! * Webhook signature verification and callback dispatch

pub mod callback;
pub use callback::*;

pub mod submission;
pub use submission::*;
