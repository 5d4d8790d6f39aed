use super::ClaimService;
use super::dto::{ClaimResponseDTO, CreateClaimRequestDTO};
use crate::model::policy::PolicyId;
use crate::model::session::AccountId;
use crate::provider::policy_ledger::dto::SubmitClaimRequest;
use crate::service::common_dto::LoadOutcome;
use crate::service::error::{BusinessLogicError, ServiceError};

impl ClaimService {
    /// Whether the claim action should be offered for `policy_id` at all.
    pub async fn can_file_claim(
        &self,
        account: &AccountId,
        policy_id: &PolicyId,
    ) -> Result<bool, ServiceError> {
        let policy = self.policy_service.get_policy(account, policy_id).await?;
        let view = self.claims.read().await;
        Ok(super::validator::can_file_claim(&policy, &view.claims))
    }

    /// Straight-line claim submission. Each call is a fresh attempt; no
    /// partial progress survives a failure, except that evidence already
    /// uploaded when the ledger rejects the submission is not rolled back.
    pub async fn submit_claim(
        &self,
        account: &AccountId,
        request: CreateClaimRequestDTO,
    ) -> Result<ClaimResponseDTO, ServiceError> {
        let policy = self
            .policy_service
            .get_policy(account, &request.policy_id)
            .await?;

        // re-checked here to cover status changes between display and submit
        {
            let view = self.claims.read().await;
            if !super::validator::can_file_claim(&policy, &view.claims) {
                return Err(BusinessLogicError::IneligiblePolicy(policy.id).into());
            }
        }

        super::validator::validate_delay_duration(
            request.delay_duration_hours,
            self.config.policy_terms.delay_threshold_hours,
        )?;
        super::validator::validate_evidence(&request.evidence)?;

        let evidence_reference = self
            .evidence_store
            .upload(request.evidence)
            .await
            .inspect_err(|error| tracing::warn!("Evidence upload failed: {error}"))?;

        let claim = self
            .policy_ledger
            .submit_claim(SubmitClaimRequest {
                policy_id: policy.id,
                delay_duration_hours: request.delay_duration_hours,
                evidence_reference,
            })
            .await
            .inspect_err(|error| tracing::warn!("Claim submission failed: {error}"))?;

        let mut view = self.claims.write().await;
        if view.owner.is_none() {
            view.owner = Some(account.clone());
        }
        if view.owner.as_ref() == Some(account) {
            view.claims.push(claim.clone());
        }
        drop(view);

        tracing::info!("Submitted claim {} for policy {}", claim.id, claim.policy_id);
        Ok(claim.into())
    }

    /// Replaces the claims view with the ledger's records for `account`.
    /// Same last-completed-wins and invalidation discipline as policy
    /// loads.
    pub async fn load_claims(&self, account: &AccountId) -> Result<LoadOutcome, ServiceError> {
        let epoch = self.claims.read().await.load_epoch;

        let claims = self
            .policy_ledger
            .list_claims(account)
            .await
            .inspect_err(|error| tracing::warn!("Claim load failed: {error}"))?;

        let mut view = self.claims.write().await;
        if view.load_epoch != epoch {
            tracing::debug!("Discarding stale claim load for {account}");
            return Ok(LoadOutcome::Superseded);
        }

        view.owner = Some(account.clone());
        view.claims = claims;
        Ok(LoadOutcome::Applied)
    }

    /// Invalidates any claim load still in flight.
    pub async fn invalidate_pending_loads(&self) {
        self.claims.write().await.load_epoch += 1;
    }

    pub async fn get_claims(
        &self,
        account: &AccountId,
    ) -> Result<Vec<ClaimResponseDTO>, ServiceError> {
        let view = self.claims.read().await;
        if view.owner.as_ref() != Some(account) {
            return Ok(vec![]);
        }

        Ok(view.claims.iter().cloned().map(Into::into).collect())
    }
}
