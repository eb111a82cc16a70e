pub const AUTHORIZATION_HEADER_NAME: &str = "Authorization";
pub const AUTHORIZATION_HEADER_VALUE_PREFIX: &str = "Bearer ";
