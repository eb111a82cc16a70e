//! Configuration for the batch mint relayer.
//!
//! Everything is read from the process environment (optionally seeded from a
//! `.env` file by `dotenvy` in `main`).

mod server_config;
pub use server_config::*;
