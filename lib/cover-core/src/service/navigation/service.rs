use super::{AccessDecision, NavigationService, View, gate};
use crate::model::session::AccountId;
use crate::service::claim::dto::{ClaimResponseDTO, CreateClaimRequestDTO};
use crate::service::error::{BusinessLogicError, ServiceError};
use crate::service::policy::dto::{CreatePolicyRequestDTO, PolicyResponseDTO};

impl NavigationService {
    /// Consults the access gate and, when allowed, performs the entered
    /// view's data load. Returns the view actually landed on, which is the
    /// landing page when the gate denies entry.
    ///
    /// Every transition invalidates loads still in flight for the previous
    /// view, so their results cannot overwrite state after the user has
    /// moved on.
    pub async fn enter(&self, view: View) -> Result<View, ServiceError> {
        let account = self.session_service.current();

        if let AccessDecision::Denied { redirect } = gate::authorize(&view, account.as_ref()) {
            tracing::debug!("Access to {view:?} denied, redirecting");
            self.set_current(redirect.clone()).await;
            return Ok(redirect);
        }

        self.set_current(view.clone()).await;

        if let Some(account) = account {
            match &view {
                View::PolicyList => {
                    self.policy_service.load_policies(&account).await?;
                }
                View::ClaimList => {
                    self.claim_service.load_claims(&account).await?;
                }
                View::Landing | View::PurchaseForm | View::ClaimForm(_) => {}
            }
        }

        Ok(view)
    }

    pub async fn current_view(&self) -> View {
        self.current_view.read().await.clone()
    }

    /// Connects the wallet and lands on the policy list.
    pub async fn connect_wallet(&self) -> Result<AccountId, ServiceError> {
        let account = self.session_service.connect().await?;

        if let Err(error) = self.enter(View::PolicyList).await {
            tracing::warn!("Policy list load after connect failed: {error}");
        }
        Ok(account)
    }

    /// Disconnects and returns to the landing page.
    pub async fn disconnect_wallet(&self) {
        self.session_service.disconnect();
        self.set_current(View::Landing).await;
    }

    /// Purchases a policy for the connected account, then returns to the
    /// policy list. A failed list refresh afterwards does not undo the
    /// purchase and is only logged.
    pub async fn purchase_policy(
        &self,
        request: CreatePolicyRequestDTO,
    ) -> Result<PolicyResponseDTO, ServiceError> {
        let account = self.require_account()?;
        let policy = self.policy_service.purchase_policy(&account, request).await?;

        if let Err(error) = self.enter(View::PolicyList).await {
            tracing::warn!("Policy list refresh after purchase failed: {error}");
        }
        Ok(policy)
    }

    /// Submits a claim for the connected account, then moves to the claims
    /// list.
    pub async fn submit_claim(
        &self,
        request: CreateClaimRequestDTO,
    ) -> Result<ClaimResponseDTO, ServiceError> {
        let account = self.require_account()?;
        let claim = self.claim_service.submit_claim(&account, request).await?;

        if let Err(error) = self.enter(View::ClaimList).await {
            tracing::warn!("Claims list refresh after submission failed: {error}");
        }
        Ok(claim)
    }

    fn require_account(&self) -> Result<AccountId, ServiceError> {
        self.session_service
            .current()
            .ok_or_else(|| BusinessLogicError::SessionNotConnected.into())
    }

    async fn set_current(&self, view: View) {
        self.policy_service.invalidate_pending_loads().await;
        self.claim_service.invalidate_pending_loads().await;
        *self.current_view.write().await = view;
    }
}
