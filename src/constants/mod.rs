//! Constants shared across the relayer service.

mod authorization;
pub use authorization::*;

mod http_client;
pub use http_client::*;

mod logging;
pub use logging::*;

mod server;
pub use server::*;

mod submission;
pub use submission::*;

mod webhook;
pub use webhook::*;
