/// Base URL of the Openfort API.
pub const OPENFORT_API_BASE_URL: &str = "https://api.openfort.xyz";

/// Chain used when neither the request nor the environment names one (Polygon Amoy).
pub const DEFAULT_CHAIN_ID: u64 = 80002;

/// Contract function invoked once per recipient.
pub const MINT_FUNCTION_NAME: &str = "mint";

/// Header carrying the idempotency token on outbound submissions.
pub const IDEMPOTENCY_KEY_HEADER_NAME: &str = "Idempotency-Key";

/// Error code the counterparty uses when an idempotency token was already accepted.
pub const IDEMPOTENCY_KEY_IN_USE_CODE: &str = "idempotency_key_in_use";

/// Default bound on the outbound submission call, in seconds.
pub const DEFAULT_SUBMISSION_TIMEOUT_SECONDS: u64 = 15;

/// Default window during which the in-memory counterparty treats a token as in use (24h).
pub const DEFAULT_IDEMPOTENCY_RETENTION_SECONDS: u64 = 24 * 60 * 60;
