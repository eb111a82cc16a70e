//! In-process counterparty used for local runs and integration tests.
//!
//! Mirrors the counterparty's idempotency contract: the first intent filed
//! under a token is accepted, and every later attempt with the same token is
//! rejected until the retention window has elapsed.
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use log::{debug, info};
use uuid::Uuid;

use super::{
    CreateTransactionIntentRequest, OpenfortError, OpenfortResult, TransactionIntent,
    TransactionIntentClientTrait,
};
use crate::models::Account;

#[derive(Debug, Clone)]
struct AcceptedIntent {
    transaction_id: String,
    accepted_at: Instant,
}

#[derive(Debug)]
pub struct InMemoryTransactionIntentClient {
    accepted: DashMap<String, AcceptedIntent>,
    intents: DashMap<String, CreateTransactionIntentRequest>,
    retention: Duration,
}

impl InMemoryTransactionIntentClient {
    pub fn new(retention: Duration) -> Self {
        info!(
            "Using in-memory counterparty with {}s idempotency retention",
            retention.as_secs()
        );
        Self {
            accepted: DashMap::new(),
            intents: DashMap::new(),
            retention,
        }
    }

    /// Number of intents accepted so far.
    pub fn filed_count(&self) -> usize {
        self.intents.len()
    }

    pub fn get_intent(&self, transaction_id: &str) -> Option<CreateTransactionIntentRequest> {
        self.intents
            .get(transaction_id)
            .map(|entry| entry.value().clone())
    }

    fn new_transaction_id() -> String {
        format!("tin_{}", Uuid::new_v4().simple())
    }
}

impl Default for InMemoryTransactionIntentClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(
            crate::constants::DEFAULT_IDEMPOTENCY_RETENTION_SECONDS,
        ))
    }
}

#[async_trait]
impl TransactionIntentClientTrait for InMemoryTransactionIntentClient {
    async fn create_transaction_intent(
        &self,
        request: CreateTransactionIntentRequest,
    ) -> OpenfortResult<TransactionIntent> {
        let now = Instant::now();
        let transaction_id = match self.accepted.entry(request.idempotency_key.clone()) {
            Entry::Occupied(mut occupied) => {
                if now.duration_since(occupied.get().accepted_at) < self.retention {
                    debug!(
                        "Rejecting intent: token already accepted for {}",
                        occupied.get().transaction_id
                    );
                    return Err(OpenfortError::IdempotencyKeyInUse);
                }
                let transaction_id = Self::new_transaction_id();
                occupied.insert(AcceptedIntent {
                    transaction_id: transaction_id.clone(),
                    accepted_at: now,
                });
                transaction_id
            }
            Entry::Vacant(vacant) => {
                let transaction_id = Self::new_transaction_id();
                vacant.insert(AcceptedIntent {
                    transaction_id: transaction_id.clone(),
                    accepted_at: now,
                });
                transaction_id
            }
        };

        self.intents.insert(transaction_id.clone(), request);

        Ok(TransactionIntent {
            id: transaction_id,
            state: Some(serde_json::Value::String("pending".to_string())),
        })
    }

    async fn create_account(&self, chain_id: u64) -> OpenfortResult<Account> {
        let id = Uuid::new_v4().simple().to_string();
        let address_seed = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());

        Ok(Account {
            id: format!("acc_{}", id),
            address: format!("0x{}", &address_seed[..40]),
            chain_id,
        })
    }
}
