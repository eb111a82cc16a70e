//! Authenticated webhook handling: signature verification and dispatch of
//! lifecycle events to the collaborator.
mod dispatcher;
pub use dispatcher::*;

mod handler;
pub use handler::*;

pub mod signature;
