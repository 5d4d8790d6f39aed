use crate::model::claim::{Claim, ClaimStateEnum, EvidenceFile};
use crate::model::policy::{Policy, PolicyStatusEnum};
use crate::service::error::ValidationError;

/// A claim may be filed only against an active policy with no other claim
/// still pending against it.
pub(crate) fn can_file_claim(policy: &Policy, claims: &[Claim]) -> bool {
    policy.status == PolicyStatusEnum::Active
        && !claims
            .iter()
            .any(|claim| claim.policy_id == policy.id && claim.status == ClaimStateEnum::Pending)
}

pub(crate) fn validate_delay_duration(
    delay_duration_hours: u32,
    threshold: u32,
) -> Result<(), ValidationError> {
    if delay_duration_hours < threshold {
        return Err(ValidationError::DelayBelowThreshold {
            got: delay_duration_hours,
            threshold,
        });
    }
    Ok(())
}

pub(crate) fn validate_evidence(evidence: &EvidenceFile) -> Result<(), ValidationError> {
    if evidence.content.is_empty() {
        return Err(ValidationError::EvidenceMissing);
    }
    Ok(())
}
