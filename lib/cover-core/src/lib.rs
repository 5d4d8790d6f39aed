//! Client core for the Micro-Insurance flight-delay application.
//!
//! Wires the wallet identity provider, the policy ledger and the evidence
//! store into the session, policy, claim and navigation services. All
//! collaborator implementations live outside this crate and are injected
//! as trait objects.

pub mod config;
pub mod model;
pub mod provider;
pub mod service;

use std::sync::Arc;

use config::core_config::CoreConfig;
use provider::evidence_store::EvidenceStore;
use provider::identity_provider::IdentityProvider;
use provider::policy_ledger::PolicyLedger;
use service::claim::ClaimService;
use service::navigation::NavigationService;
use service::policy::PolicyService;
use service::session::SessionService;

pub struct CoverCore {
    pub session_service: Arc<SessionService>,
    pub policy_service: Arc<PolicyService>,
    pub claim_service: Arc<ClaimService>,
    pub navigation_service: Arc<NavigationService>,
}

impl CoverCore {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider + Send + Sync>,
        policy_ledger: Arc<dyn PolicyLedger + Send + Sync>,
        evidence_store: Arc<dyn EvidenceStore + Send + Sync>,
        config: CoreConfig,
    ) -> Self {
        let config = Arc::new(config);

        let session_service = Arc::new(SessionService::new(identity_provider));
        let policy_service = Arc::new(PolicyService::new(policy_ledger.clone(), config.clone()));
        let claim_service = Arc::new(ClaimService::new(
            policy_service.clone(),
            policy_ledger,
            evidence_store,
            config,
        ));
        let navigation_service = Arc::new(NavigationService::new(
            session_service.clone(),
            policy_service.clone(),
            claim_service.clone(),
        ));

        Self {
            session_service,
            policy_service,
            claim_service,
            navigation_service,
        }
    }
}
