use serde::{Deserialize, Serialize};

/// Body of `POST /api/wallet/create`. The body may be omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletCreateRequest {
    #[serde(default, alias = "desiredChainId")]
    pub chain_id: Option<u64>,
}

/// Custodial account as returned by the counterparty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub address: String,
    pub chain_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletCreateResponse {
    pub account_handle: String,
    pub address: String,
    pub chain_id: u64,
    pub created_at: String,
}

impl From<Account> for WalletCreateResponse {
    fn from(account: Account) -> Self {
        Self {
            account_handle: account.id,
            address: account.address,
            chain_id: account.chain_id,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
