use uuid::Uuid;

/// Resolves the idempotency token for a submission.
///
/// Tokens are not persisted here. Uniqueness is enforced by the counterparty,
/// which rejects a second intent carrying an already accepted token.
pub struct IdempotencyKeyManager;

impl IdempotencyKeyManager {
    /// Returns the caller's token when present and non-blank, otherwise a
    /// freshly generated one.
    pub fn resolve(supplied: Option<&str>) -> String {
        match supplied.map(str::trim) {
            Some(token) if !token.is_empty() => token.to_string(),
            _ => Self::generate(),
        }
    }

    /// UUIDv4 drawn from the OS CSPRNG.
    pub fn generate() -> String {
        Uuid::new_v4().to_string()
    }
}
