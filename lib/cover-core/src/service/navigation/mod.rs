pub mod service;

pub(crate) mod gate;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::policy::PolicyId;
use crate::service::claim::ClaimService;
use crate::service::policy::PolicyService;
use crate::service::session::SessionService;

/// Client-facing views. The claim form is keyed by the policy the claim
/// targets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum View {
    Landing,
    PolicyList,
    PurchaseForm,
    ClaimForm(PolicyId),
    ClaimList,
}

impl View {
    pub fn requires_identity(&self) -> bool {
        !matches!(self, View::Landing)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessDecision {
    Allowed,
    Denied { redirect: View },
}

/// Sequences view transitions driven by workflow outcomes. Nothing else in
/// the core triggers navigation.
pub struct NavigationService {
    session_service: Arc<SessionService>,
    policy_service: Arc<PolicyService>,
    claim_service: Arc<ClaimService>,
    current_view: RwLock<View>,
}

impl NavigationService {
    pub(crate) fn new(
        session_service: Arc<SessionService>,
        policy_service: Arc<PolicyService>,
        claim_service: Arc<ClaimService>,
    ) -> Self {
        Self {
            session_service,
            policy_service,
            claim_service,
            current_view: RwLock::new(View::Landing),
        }
    }
}
