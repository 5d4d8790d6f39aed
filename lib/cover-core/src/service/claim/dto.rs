use time::OffsetDateTime;

use crate::model::claim::{Claim, ClaimId, ClaimStateEnum, EvidenceFile, EvidenceReference};
use crate::model::policy::PolicyId;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateClaimRequestDTO {
    pub policy_id: PolicyId,
    pub delay_duration_hours: u32,
    pub evidence: EvidenceFile,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimResponseDTO {
    pub id: ClaimId,
    pub policy_id: PolicyId,
    pub delay_duration_hours: u32,
    pub evidence_reference: EvidenceReference,
    pub status: ClaimStateEnum,
    pub created_date: OffsetDateTime,
}

impl From<Claim> for ClaimResponseDTO {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id,
            policy_id: claim.policy_id,
            delay_duration_hours: claim.delay_duration_hours,
            evidence_reference: claim.evidence_reference,
            status: claim.status,
            created_date: claim.created_date,
        }
    }
}
