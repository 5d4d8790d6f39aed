use strum::Display;
use time::OffsetDateTime;
use uuid::Uuid;

use super::policy::PolicyId;

pub type ClaimId = Uuid;

/// One submission against exactly one policy. Immutable on the client after
/// creation; only the ledger moves `status` out of `Pending`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claim {
    pub id: ClaimId,
    pub policy_id: PolicyId,
    pub delay_duration_hours: u32,
    pub evidence_reference: EvidenceReference,
    pub status: ClaimStateEnum,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum ClaimStateEnum {
    Pending,
    Approved,
    Rejected,
}

/// Content reference handed back by the evidence store.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EvidenceReference(String);

impl EvidenceReference {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EvidenceReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Delay proof selected by the user, uploaded before claim submission.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EvidenceFile {
    pub file_name: String,
    pub content: Vec<u8>,
}
