pub mod dto;

use async_trait::async_trait;
use thiserror::Error;

use self::dto::{PurchasePolicyRequest, SubmitClaimRequest};
use crate::model::claim::Claim;
use crate::model::policy::Policy;
use crate::model::session::AccountId;

#[derive(Debug, Error)]
pub enum PolicyLedgerError {
    #[error("Policy load failed: `{0}`")]
    LoadFailed(String),
    #[error("Policy purchase failed: `{0}`")]
    PurchaseFailed(String),
    #[error("Claim submission failed: `{0}`")]
    SubmissionFailed(String),
}

/// System of record for policies and claims. Premium collection and payout
/// execution happen behind this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PolicyLedger {
    async fn list_policies(&self, account: &AccountId) -> Result<Vec<Policy>, PolicyLedgerError>;

    async fn list_claims(&self, account: &AccountId) -> Result<Vec<Claim>, PolicyLedgerError>;

    async fn purchase_policy(
        &self,
        account: &AccountId,
        request: PurchasePolicyRequest,
    ) -> Result<Policy, PolicyLedgerError>;

    async fn submit_claim(
        &self,
        request: SubmitClaimRequest,
    ) -> Result<Claim, PolicyLedgerError>;
}
