use actix_web::HttpRequest;
use subtle::ConstantTimeEq;

use crate::{
    constants::{AUTHORIZATION_HEADER_NAME, AUTHORIZATION_HEADER_VALUE_PREFIX},
    models::{ApiError, SecretString},
};

/// Validates the bearer API key guarding the admin routes.
///
/// Exactly one `Authorization: Bearer <key>` header is accepted, and the key is
/// compared in constant time.
pub fn validate_api_key(req: &HttpRequest, expected_key: &SecretString) -> Result<(), ApiError> {
    let token = extract_token_from_request(req)?;

    if expected_key.is_empty() {
        return Err(ApiError::AuthenticationFailure(
            "Invalid API key".to_string(),
        ));
    }

    let matches: bool = token.as_bytes().ct_eq(expected_key.as_bytes()).into();
    if !matches {
        return Err(ApiError::AuthenticationFailure(
            "Invalid API key".to_string(),
        ));
    }

    Ok(())
}

fn extract_token_from_request(req: &HttpRequest) -> Result<&str, ApiError> {
    let headers: Vec<_> = req.headers().get_all(AUTHORIZATION_HEADER_NAME).collect();
    if headers.len() != 1 {
        return Err(ApiError::AuthenticationFailure(
            "Missing or invalid Authorization header".to_string(),
        ));
    }

    let auth_header = headers[0].to_str().map_err(|_| {
        ApiError::AuthenticationFailure("Invalid Authorization header".to_string())
    })?;

    let token = auth_header
        .strip_prefix(AUTHORIZATION_HEADER_VALUE_PREFIX)
        .ok_or_else(|| {
            ApiError::AuthenticationFailure("Invalid Authorization header format".to_string())
        })?;

    if token.is_empty() || token.contains(' ') {
        return Err(ApiError::AuthenticationFailure("Empty API key".to_string()));
    }

    Ok(token)
}
