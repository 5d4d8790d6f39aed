use time::Date;

use crate::model::claim::EvidenceReference;
use crate::model::policy::PolicyId;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchasePolicyRequest {
    pub airline: String,
    pub flight_number: String,
    pub departure_date: Date,
    pub coverage_amount: u64,
    pub premium: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmitClaimRequest {
    pub policy_id: PolicyId,
    pub delay_duration_hours: u32,
    pub evidence_reference: EvidenceReference,
}
