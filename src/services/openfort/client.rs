//! HTTP client for the Openfort API.
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{
    CreateAccountRequest, CreateTransactionIntentRequest, OpenfortError, OpenfortResult,
    TransactionIntent, TransactionIntentClientTrait,
};
use crate::{
    constants::{
        DEFAULT_HTTP_CLIENT_CONNECT_TIMEOUT_SECONDS, DEFAULT_HTTP_CLIENT_POOL_IDLE_TIMEOUT_SECONDS,
        DEFAULT_HTTP_CLIENT_POOL_MAX_IDLE_PER_HOST, DEFAULT_HTTP_CLIENT_TCP_KEEPALIVE_SECONDS,
        DEFAULT_HTTP_CLIENT_TIMEOUT_SECONDS, IDEMPOTENCY_KEY_HEADER_NAME,
        IDEMPOTENCY_KEY_IN_USE_CODE,
    },
    models::{Account, SecretString},
};

#[derive(Debug, Clone)]
pub struct OpenfortClient {
    client: Client,
    base_url: String,
    secret_key: SecretString,
}

impl OpenfortClient {
    pub fn new(base_url: &str, secret_key: SecretString) -> OpenfortResult<Self> {
        if secret_key.is_empty() {
            return Err(OpenfortError::ConfigError(
                "Openfort secret key must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(
                DEFAULT_HTTP_CLIENT_CONNECT_TIMEOUT_SECONDS,
            ))
            .timeout(Duration::from_secs(DEFAULT_HTTP_CLIENT_TIMEOUT_SECONDS))
            .pool_max_idle_per_host(DEFAULT_HTTP_CLIENT_POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Duration::from_secs(
                DEFAULT_HTTP_CLIENT_POOL_IDLE_TIMEOUT_SECONDS,
            ))
            .tcp_keepalive(Duration::from_secs(DEFAULT_HTTP_CLIENT_TCP_KEEPALIVE_SECONDS))
            .build()
            .map_err(|e| {
                OpenfortError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;

        info!("Creating Openfort client for {}", base_url);

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a raw response into `T`, or into a classified error.
    async fn process_response<T>(
        &self,
        response: Result<reqwest::Response, reqwest::Error>,
    ) -> OpenfortResult<T>
    where
        T: DeserializeOwned,
    {
        let response = response.map_err(|e| {
            debug!("Openfort request error: {:?}", e);
            if e.is_timeout() {
                OpenfortError::Timeout
            } else {
                OpenfortError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| OpenfortError::ResponseParsing(e.to_string()));
        }

        let body_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read Openfort error response body: {}", e);
                String::new()
            }
        };
        debug!("Openfort error response ({}): {}", status, body_text);

        let (code, message) = parse_error_body(&body_text);
        if status.as_u16() == 409 || code.as_deref() == Some(IDEMPOTENCY_KEY_IN_USE_CODE) {
            return Err(OpenfortError::IdempotencyKeyInUse);
        }

        Err(OpenfortError::ApiError {
            status: status.as_u16(),
            code,
            message: message.unwrap_or_else(|| format!("HTTP {}", status)),
        })
    }
}

/// Extracts `(code, message)` from either `{"error": {...}}` or a flat error object.
fn parse_error_body(body: &str) -> (Option<String>, Option<String>) {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return (None, (!body.is_empty()).then(|| body.to_string())),
    };
    let error = match value.get("error") {
        Some(inner) if inner.is_object() => inner,
        _ => &value,
    };
    let field = |name: &str| {
        error
            .get(name)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    };

    (field("code"), field("message"))
}

#[async_trait]
impl TransactionIntentClientTrait for OpenfortClient {
    async fn create_transaction_intent(
        &self,
        request: CreateTransactionIntentRequest,
    ) -> OpenfortResult<TransactionIntent> {
        debug!(
            "Creating transaction intent for account {} with {} interactions",
            request.account,
            request.interactions.len()
        );
        let response = self
            .client
            .post(self.url("/v1/transaction_intents"))
            .bearer_auth(self.secret_key.as_str())
            .header(IDEMPOTENCY_KEY_HEADER_NAME, request.idempotency_key.as_str())
            .json(&request)
            .send()
            .await;

        self.process_response::<TransactionIntent>(response).await
    }

    async fn create_account(&self, chain_id: u64) -> OpenfortResult<Account> {
        debug!("Creating account on chain {}", chain_id);
        let response = self
            .client
            .post(self.url("/v1/accounts"))
            .bearer_auth(self.secret_key.as_str())
            .json(&CreateAccountRequest { chain_id })
            .send()
            .await;

        self.process_response::<Account>(response).await
    }
}
