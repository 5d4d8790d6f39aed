pub mod dto;
pub mod service;

pub(crate) mod mapper;
pub(crate) mod validator;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::core_config::CoreConfig;
use crate::model::policy::Policy;
use crate::model::session::AccountId;
use crate::provider::policy_ledger::PolicyLedger;

/// Client view of the policies owned by the current identity.
pub struct PolicyService {
    policy_ledger: Arc<dyn PolicyLedger + Send + Sync>,
    registry: RwLock<PolicyRegistry>,
    config: Arc<CoreConfig>,
}

/// The epoch lives inside the lock so an invalidation cannot slip in
/// between a load's staleness check and its commit.
#[derive(Default)]
struct PolicyRegistry {
    owner: Option<AccountId>,
    policies: Vec<Policy>,
    load_epoch: u64,
}

impl PolicyService {
    pub(crate) fn new(
        policy_ledger: Arc<dyn PolicyLedger + Send + Sync>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            policy_ledger,
            registry: RwLock::new(PolicyRegistry::default()),
            config,
        }
    }
}
