//! Files batch submissions with the counterparty.
//!
//! This is the only component that performs the outbound submission call. It
//! never retries: a caller that wants to retry re-invokes with the same
//! idempotency token and the counterparty turns the repeat into a duplicate.
use std::{sync::Arc, time::Duration};

use log::{debug, error, info, warn};

use crate::{
    metrics::SUBMISSION_LATENCY,
    models::{InteractionDescriptor, SubmissionError, SubmissionResult, TransactionState},
    services::{
        CreateTransactionIntentRequest, IntentInteraction, OpenfortError,
        TransactionIntentClientTrait,
    },
};

pub struct TransactionSubmitter<C>
where
    C: TransactionIntentClientTrait,
{
    client: Arc<C>,
    chain_id: u64,
    policy_id: Option<String>,
    timeout: Duration,
}

impl<C> TransactionSubmitter<C>
where
    C: TransactionIntentClientTrait,
{
    pub fn new(client: Arc<C>, chain_id: u64, policy_id: Option<String>, timeout: Duration) -> Self {
        Self {
            client,
            chain_id,
            policy_id,
            timeout,
        }
    }

    /// Files one transaction intent carrying every descriptor, in order.
    ///
    /// Returns [`SubmissionError::DuplicateSubmission`] when the token was
    /// already accepted, and a retryable [`SubmissionError::SubmissionFailed`]
    /// when the call does not finish within the configured timeout.
    pub async fn submit(
        &self,
        account_handle: &str,
        contract_address: &str,
        descriptors: &[InteractionDescriptor],
        idempotency_token: &str,
    ) -> Result<SubmissionResult, SubmissionError> {
        if descriptors.is_empty() {
            return Err(SubmissionError::Validation(
                "At least one interaction is required".to_string(),
            ));
        }
        if idempotency_token.trim().is_empty() {
            return Err(SubmissionError::Validation(
                "Idempotency token must not be empty".to_string(),
            ));
        }

        let request = CreateTransactionIntentRequest {
            account: account_handle.to_string(),
            chain_id: self.chain_id,
            policy: self.policy_id.clone(),
            interactions: descriptors.iter().map(IntentInteraction::from).collect(),
            idempotency_key: idempotency_token.to_string(),
        };

        debug!(
            "Submitting {} interactions against {} for account {}",
            descriptors.len(),
            contract_address,
            account_handle
        );

        let timer = SUBMISSION_LATENCY.start_timer();
        let outcome = tokio::time::timeout(
            self.timeout,
            self.client.create_transaction_intent(request),
        )
        .await;
        timer.observe_duration();

        let intent = match outcome {
            Ok(Ok(intent)) => intent,
            Ok(Err(OpenfortError::IdempotencyKeyInUse)) => {
                info!(
                    "Idempotency token {} already accepted, treating as in flight",
                    idempotency_token
                );
                return Err(SubmissionError::DuplicateSubmission {
                    token: idempotency_token.to_string(),
                });
            }
            Ok(Err(e)) => {
                error!("Counterparty rejected submission: {}", e);
                return Err(SubmissionError::SubmissionFailed {
                    message: e.safe_description().to_string(),
                    retryable: e.is_retryable(),
                });
            }
            Err(_) => {
                warn!(
                    "Submission with token {} timed out after {:?}",
                    idempotency_token, self.timeout
                );
                return Err(SubmissionError::SubmissionFailed {
                    message: "Counterparty request timed out".to_string(),
                    retryable: true,
                });
            }
        };

        info!(
            "Transaction intent {} filed with {} interactions",
            intent.id,
            descriptors.len()
        );

        Ok(SubmissionResult {
            state: TransactionState::from_counterparty(intent.state_label()),
            transaction_id: intent.id,
            idempotency_token: idempotency_token.to_string(),
            item_count: descriptors.len(),
        })
    }
}
