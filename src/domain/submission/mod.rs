//! Batch submission flow: resolve the idempotency token, expand recipients
//! into interactions and file a single transaction intent.
mod builder;
pub use builder::*;

mod idempotency;
pub use idempotency::*;

mod submitter;
pub use submitter::*;

use std::{sync::Arc, time::Duration};

use log::info;

use crate::{
    metrics::SUBMISSIONS_TOTAL,
    models::{BatchMintRequest, SubmissionError, SubmissionRequest, SubmissionResult},
    services::TransactionIntentClientTrait,
};

pub struct BatchMintService<C>
where
    C: TransactionIntentClientTrait,
{
    submitter: TransactionSubmitter<C>,
}

impl<C> BatchMintService<C>
where
    C: TransactionIntentClientTrait,
{
    pub fn new(client: Arc<C>, chain_id: u64, policy_id: Option<String>, timeout: Duration) -> Self {
        Self {
            submitter: TransactionSubmitter::new(client, chain_id, policy_id, timeout),
        }
    }

    pub async fn submit_batch(
        &self,
        request: BatchMintRequest,
    ) -> Result<SubmissionResult, SubmissionError> {
        let result = self.process(request).await;

        let outcome = match &result {
            Ok(_) => "accepted",
            Err(e) => e.outcome_label(),
        };
        SUBMISSIONS_TOTAL.with_label_values(&[outcome]).inc();

        result
    }

    async fn process(&self, request: BatchMintRequest) -> Result<SubmissionResult, SubmissionError> {
        let token = IdempotencyKeyManager::resolve(request.idempotency_token.as_deref());
        let request = SubmissionRequest::new(
            request.account_handle,
            request.contract_address,
            request.recipients,
            token,
        )?;

        let descriptors = build_interactions(
            &request.account_handle,
            &request.target_contract,
            &request.items,
        )?;

        info!(
            "Batch mint of {} recipients for account {} (token {})",
            descriptors.len(),
            request.account_handle,
            request.idempotency_token
        );

        self.submitter
            .submit(
                &request.account_handle,
                &request.target_contract,
                &descriptors,
                &request.idempotency_token,
            )
            .await
    }
}
