pub mod dto;
pub mod service;

pub(crate) mod validator;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::core_config::CoreConfig;
use crate::model::claim::Claim;
use crate::model::session::AccountId;
use crate::provider::evidence_store::EvidenceStore;
use crate::provider::policy_ledger::PolicyLedger;
use crate::service::policy::PolicyService;

/// Constructs and submits claims, enforcing eligibility before any
/// collaborator is contacted.
pub struct ClaimService {
    policy_service: Arc<PolicyService>,
    policy_ledger: Arc<dyn PolicyLedger + Send + Sync>,
    evidence_store: Arc<dyn EvidenceStore + Send + Sync>,
    claims: RwLock<ClaimsView>,
    config: Arc<CoreConfig>,
}

/// The epoch lives inside the lock, same as the policy registry.
#[derive(Default)]
struct ClaimsView {
    owner: Option<AccountId>,
    claims: Vec<Claim>,
    load_epoch: u64,
}

impl ClaimService {
    pub(crate) fn new(
        policy_service: Arc<PolicyService>,
        policy_ledger: Arc<dyn PolicyLedger + Send + Sync>,
        evidence_store: Arc<dyn EvidenceStore + Send + Sync>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            policy_service,
            policy_ledger,
            evidence_store,
            claims: RwLock::new(ClaimsView::default()),
            config,
        }
    }
}

#[cfg(test)]
mod test;
