//! Server configuration loaded from environment variables.
use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::{
    constants::{
        DEFAULT_CHAIN_ID, DEFAULT_HOST, DEFAULT_IDEMPOTENCY_RETENTION_SECONDS, DEFAULT_PORT,
        DEFAULT_REQUEST_TIMEOUT_SECONDS, DEFAULT_SUBMISSION_TIMEOUT_SECONDS,
        OPENFORT_API_BASE_URL,
    },
    models::SecretString,
};

#[derive(Error, Debug, PartialEq)]
pub enum ServerConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVariable(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Which counterparty backs the transaction submission client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterpartyMode {
    Openfort,
    InMemory,
}

impl FromStr for CounterpartyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openfort" => Ok(CounterpartyMode::Openfort),
            "in_memory" | "in-memory" | "memory" => Ok(CounterpartyMode::InMemory),
            other => Err(format!("unknown counterparty mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_key: SecretString,
    pub counterparty_mode: CounterpartyMode,
    /// Required only when `counterparty_mode` is `Openfort`.
    pub openfort_secret_key: Option<SecretString>,
    pub openfort_api_url: String,
    pub chain_id: u64,
    pub policy_id: Option<String>,
    /// Absent means every webhook fails verification.
    pub webhook_secret: Option<SecretString>,
    pub submission_timeout_seconds: u64,
    pub request_timeout_seconds: u64,
    pub idempotency_retention_seconds: u64,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerConfigError> {
        let api_key = non_empty_var("API_KEY")
            .map(|key| SecretString::new(&key))
            .ok_or(ServerConfigError::MissingVariable("API_KEY"))?;

        let counterparty_mode = match non_empty_var("COUNTERPARTY_MODE") {
            Some(raw) => raw
                .parse::<CounterpartyMode>()
                .map_err(|reason| ServerConfigError::InvalidValue {
                    name: "COUNTERPARTY_MODE",
                    reason,
                })?,
            None => CounterpartyMode::Openfort,
        };

        let openfort_secret_key =
            non_empty_var("OPENFORT_SECRET_KEY").map(|key| SecretString::new(&key));
        if counterparty_mode == CounterpartyMode::Openfort && openfort_secret_key.is_none() {
            return Err(ServerConfigError::MissingVariable("OPENFORT_SECRET_KEY"));
        }

        let chain_id = match non_empty_var("CHAIN_ID").or_else(|| non_empty_var("NEXT_PUBLIC_CHAIN_ID")) {
            Some(raw) => raw.parse::<u64>().map_err(|e| ServerConfigError::InvalidValue {
                name: "CHAIN_ID",
                reason: e.to_string(),
            })?,
            None => DEFAULT_CHAIN_ID,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_var("PORT", DEFAULT_PORT)?,
            api_key,
            counterparty_mode,
            openfort_secret_key,
            openfort_api_url: non_empty_var("OPENFORT_API_URL")
                .unwrap_or_else(|| OPENFORT_API_BASE_URL.to_string()),
            chain_id,
            policy_id: non_empty_var("OPENFORT_POLICY_ID"),
            webhook_secret: non_empty_var("OPENFORT_WEBHOOK_SECRET")
                .map(|secret| SecretString::new(&secret)),
            submission_timeout_seconds: parse_var(
                "SUBMISSION_TIMEOUT_SECONDS",
                DEFAULT_SUBMISSION_TIMEOUT_SECONDS,
            )?,
            request_timeout_seconds: parse_var(
                "REQUEST_TIMEOUT_SECONDS",
                DEFAULT_REQUEST_TIMEOUT_SECONDS,
            )?,
            idempotency_retention_seconds: parse_var(
                "IDEMPOTENCY_RETENTION_SECONDS",
                DEFAULT_IDEMPOTENCY_RETENTION_SECONDS,
            )?,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, ServerConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty_var(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ServerConfigError::InvalidValue {
                name,
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "API_KEY",
        "COUNTERPARTY_MODE",
        "OPENFORT_SECRET_KEY",
        "OPENFORT_API_URL",
        "CHAIN_ID",
        "NEXT_PUBLIC_CHAIN_ID",
        "OPENFORT_POLICY_ID",
        "OPENFORT_WEBHOOK_SECRET",
        "SUBMISSION_TIMEOUT_SECONDS",
        "REQUEST_TIMEOUT_SECONDS",
        "IDEMPOTENCY_RETENTION_SECONDS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn set_required() {
        env::set_var("API_KEY", "admin-key");
        env::set_var("OPENFORT_SECRET_KEY", "sk_test_123");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        set_required();

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_key.as_str(), "admin-key");
        assert_eq!(config.counterparty_mode, CounterpartyMode::Openfort);
        assert_eq!(config.openfort_api_url, OPENFORT_API_BASE_URL);
        assert_eq!(config.chain_id, 80002);
        assert!(config.policy_id.is_none());
        assert!(config.webhook_secret.is_none());
        assert_eq!(config.submission_timeout_seconds, 15);
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.idempotency_retention_seconds, 86400);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_required();
        env::set_var("PORT", "9090");
        env::set_var("CHAIN_ID", "137");
        env::set_var("OPENFORT_POLICY_ID", "pol_123");
        env::set_var("OPENFORT_WEBHOOK_SECRET", "whsec");
        env::set_var("SUBMISSION_TIMEOUT_SECONDS", "5");

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.chain_id, 137);
        assert_eq!(config.policy_id.as_deref(), Some("pol_123"));
        assert_eq!(
            config.webhook_secret.as_ref().map(|s| s.as_str()),
            Some("whsec")
        );
        assert_eq!(config.submission_timeout_seconds, 5);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_chain_id_falls_back_to_public_variable() {
        clear_env();
        set_required();
        env::set_var("NEXT_PUBLIC_CHAIN_ID", "11155111");

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.chain_id, 11155111);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_webhook_secret_is_treated_as_absent() {
        clear_env();
        set_required();
        env::set_var("OPENFORT_WEBHOOK_SECRET", "");

        let config = ServerConfig::from_env().unwrap();

        assert!(config.webhook_secret.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_api_key() {
        clear_env();
        env::set_var("OPENFORT_SECRET_KEY", "sk_test_123");

        let result = ServerConfig::from_env();

        assert_eq!(
            result.unwrap_err(),
            ServerConfigError::MissingVariable("API_KEY")
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_openfort_secret_in_openfort_mode() {
        clear_env();
        env::set_var("API_KEY", "admin-key");

        let result = ServerConfig::from_env();

        assert_eq!(
            result.unwrap_err(),
            ServerConfigError::MissingVariable("OPENFORT_SECRET_KEY")
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_in_memory_mode_does_not_need_openfort_secret() {
        clear_env();
        env::set_var("API_KEY", "admin-key");
        env::set_var("COUNTERPARTY_MODE", "in_memory");

        let config = ServerConfig::from_env().unwrap();

        assert_eq!(config.counterparty_mode, CounterpartyMode::InMemory);
        assert!(config.openfort_secret_key.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env();
        set_required();
        env::set_var("PORT", "not-a-port");

        let result = ServerConfig::from_env();

        assert!(matches!(
            result,
            Err(ServerConfigError::InvalidValue { name: "PORT", .. })
        ));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_counterparty_mode() {
        clear_env();
        set_required();
        env::set_var("COUNTERPARTY_MODE", "carrier-pigeon");

        let result = ServerConfig::from_env();

        assert!(matches!(
            result,
            Err(ServerConfigError::InvalidValue {
                name: "COUNTERPARTY_MODE",
                ..
            })
        ));
        clear_env();
    }
}
