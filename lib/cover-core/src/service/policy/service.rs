use time::OffsetDateTime;

use super::PolicyService;
use super::dto::{CreatePolicyRequestDTO, PolicyResponseDTO};
use super::mapper::policy_to_response;
use crate::model::policy::{Policy, PolicyId};
use crate::model::session::AccountId;
use crate::provider::policy_ledger::dto::PurchasePolicyRequest;
use crate::service::common_dto::LoadOutcome;
use crate::service::error::{EntityNotFoundError, ServiceError};

impl PolicyService {
    /// Replaces the visible policy set with the ledger's view for
    /// `account`.
    ///
    /// Loads may overlap; each one commits at its own completion, so the
    /// last *completed* load wins. A load invalidated while in flight drops
    /// its result without touching the registry.
    pub async fn load_policies(&self, account: &AccountId) -> Result<LoadOutcome, ServiceError> {
        let epoch = self.registry.read().await.load_epoch;

        let policies = self
            .policy_ledger
            .list_policies(account)
            .await
            .inspect_err(|error| tracing::warn!("Policy load failed: {error}"))?;

        let mut registry = self.registry.write().await;
        if registry.load_epoch != epoch {
            tracing::debug!("Discarding stale policy load for {account}");
            return Ok(LoadOutcome::Superseded);
        }

        registry.owner = Some(account.clone());
        registry.policies = policies;
        Ok(LoadOutcome::Applied)
    }

    /// Invalidates any policy load still in flight. Called on view
    /// transitions so an abandoned load cannot overwrite the registry when
    /// it eventually completes.
    pub async fn invalidate_pending_loads(&self) {
        self.registry.write().await.load_epoch += 1;
    }

    /// Validates the flight details locally, then purchases through the
    /// ledger with the standard terms. On success the new policy is
    /// appended to the registry.
    pub async fn purchase_policy(
        &self,
        account: &AccountId,
        request: CreatePolicyRequestDTO,
    ) -> Result<PolicyResponseDTO, ServiceError> {
        let now = OffsetDateTime::now_utc();
        let departure_date = super::validator::validate_create_request(&request, now)?;

        let terms = &self.config.policy_terms;
        let policy = self
            .policy_ledger
            .purchase_policy(
                account,
                PurchasePolicyRequest {
                    airline: request.airline,
                    flight_number: request.flight_number,
                    departure_date,
                    coverage_amount: terms.coverage_amount,
                    premium: terms.premium,
                },
            )
            .await
            .inspect_err(|error| tracing::warn!("Policy purchase failed: {error}"))?;

        let mut registry = self.registry.write().await;
        if registry.owner.is_none() {
            registry.owner = Some(account.clone());
        }
        if registry.owner.as_ref() == Some(account) {
            registry.policies.push(policy.clone());
        }
        drop(registry);

        tracing::info!(
            "Purchased policy {} for flight {}",
            policy.id,
            policy.flight_number
        );
        Ok(policy_to_response(&policy, now, terms.expiry_grace_hours))
    }

    /// Registry read for `account`, with status derived at call time.
    pub async fn get_policies(
        &self,
        account: &AccountId,
    ) -> Result<Vec<PolicyResponseDTO>, ServiceError> {
        let now = OffsetDateTime::now_utc();
        let grace_hours = self.config.policy_terms.expiry_grace_hours;

        let registry = self.registry.read().await;
        if registry.owner.as_ref() != Some(account) {
            return Ok(vec![]);
        }

        Ok(registry
            .policies
            .iter()
            .map(|policy| policy_to_response(policy, now, grace_hours))
            .collect())
    }

    /// Resolves one policy owned by `account` for the claim workflow.
    pub(crate) async fn get_policy(
        &self,
        account: &AccountId,
        policy_id: &PolicyId,
    ) -> Result<Policy, ServiceError> {
        let registry = self.registry.read().await;
        if registry.owner.as_ref() != Some(account) {
            return Err(EntityNotFoundError::Policy(*policy_id).into());
        }

        registry
            .policies
            .iter()
            .find(|policy| policy.id == *policy_id)
            .cloned()
            .ok_or_else(|| EntityNotFoundError::Policy(*policy_id).into())
    }
}
