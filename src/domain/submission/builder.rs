//! Expands a batch of recipients into per-recipient contract interactions.
use crate::{
    constants::MINT_FUNCTION_NAME,
    models::{InteractionArgument, InteractionDescriptor, SubmissionError},
};

/// Builds one `mint(recipient, sequence)` descriptor per recipient, in input
/// order, with a 1-based sequence number.
///
/// The output depends only on the inputs, so re-deriving descriptors for a
/// retried batch yields identical interactions.
pub fn build_interactions(
    account_handle: &str,
    contract_address: &str,
    recipients: &[String],
) -> Result<Vec<InteractionDescriptor>, SubmissionError> {
    if account_handle.trim().is_empty()
        || contract_address.trim().is_empty()
        || recipients.is_empty()
    {
        return Err(SubmissionError::Validation(
            "Missing required fields: accountHandle, contractAddress, recipients".to_string(),
        ));
    }

    if let Some(position) = recipients.iter().position(|r| r.trim().is_empty()) {
        return Err(SubmissionError::Validation(format!(
            "Recipient at position {} is empty",
            position + 1
        )));
    }

    Ok(recipients
        .iter()
        .enumerate()
        .map(|(index, recipient)| InteractionDescriptor {
            contract: contract_address.to_string(),
            operation: MINT_FUNCTION_NAME.to_string(),
            arguments: vec![
                InteractionArgument::Address(recipient.clone()),
                InteractionArgument::Uint(index as u64 + 1),
            ],
        })
        .collect())
}
