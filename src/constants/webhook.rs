/// Header carrying the hex-encoded HMAC-SHA256 of the raw webhook body.
pub const WEBHOOK_SIGNATURE_HEADER_NAME: &str = "x-openfort-signature";

pub const EVENT_TRANSACTION_INTENT_SUCCEEDED: &str = "transaction_intent.succeeded";
pub const EVENT_TRANSACTION_INTENT_FAILED: &str = "transaction_intent.failed";
pub const EVENT_TRANSACTION_INTENT_PENDING: &str = "transaction_intent.pending";
