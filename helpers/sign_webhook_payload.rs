//! Webhook Signature Tool
//!
//! Prints the `x-openfort-signature` header value for a webhook payload, so
//! the webhook endpoint can be exercised by hand.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example sign_webhook_payload -- \
//!     --secret "$OPENFORT_WEBHOOK_SECRET" \
//!     --payload '{"type":"transaction_intent.succeeded","data":{"id":"tin_123"}}'
//! ```
//!
//! `--payload-file` signs a file's exact bytes instead. The secret falls back
//! to `OPENFORT_WEBHOOK_SECRET` when `--secret` is omitted.
use std::{env, fs, path::PathBuf};

use batch_mint_relayer::{constants::WEBHOOK_SIGNATURE_HEADER_NAME, domain::signature};
use clap::Parser;
use eyre::{eyre, Result, WrapErr};

#[derive(Parser, Debug)]
#[command(about = "Sign a webhook payload with the shared webhook secret")]
struct Args {
    /// Webhook shared secret
    #[arg(long)]
    secret: Option<String>,

    /// Payload to sign, as given
    #[arg(long, conflicts_with = "payload_file")]
    payload: Option<String>,

    /// File whose exact bytes are signed
    #[arg(long)]
    payload_file: Option<PathBuf>,

    /// Print a ready-to-run curl command against this base URL
    #[arg(long)]
    url: Option<String>,
}

/// Main entry point for the webhook signature tool
fn main() -> Result<()> {
    let args = Args::parse();

    let secret = match args.secret {
        Some(secret) => secret,
        None => env::var("OPENFORT_WEBHOOK_SECRET")
            .map_err(|_| eyre!("Pass --secret or set OPENFORT_WEBHOOK_SECRET"))?,
    };

    let payload = match (args.payload, args.payload_file) {
        (Some(payload), _) => payload.into_bytes(),
        (None, Some(path)) => fs::read(&path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
        (None, None) => return Err(eyre!("Pass --payload or --payload-file")),
    };

    let signature = sign_payload(&payload, &secret)?;

    match args.url {
        Some(url) => println!(
            "curl -X POST '{}/api/webhooks/openfort' -H '{}: {}' -H 'content-type: application/json' --data-binary '{}'",
            url.trim_end_matches('/'),
            WEBHOOK_SIGNATURE_HEADER_NAME,
            signature,
            String::from_utf8_lossy(&payload)
        ),
        None => println!("{}: {}", WEBHOOK_SIGNATURE_HEADER_NAME, signature),
    }

    Ok(())
}

fn sign_payload(payload: &[u8], secret: &str) -> Result<String> {
    signature::sign(payload, secret.as_bytes()).ok_or_else(|| eyre!("Webhook secret is empty"))
}
