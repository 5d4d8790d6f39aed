use time::{Duration, OffsetDateTime};

use super::dto::PolicyResponseDTO;
use crate::model::policy::{Policy, PolicyStatusEnum};

/// Status as presented to the user: a pure function of the stored policy,
/// the current time and the grace window, never stored back.
///
/// The expired label only affects presentation. Claim eligibility is decided
/// by the claim workflow against the ledger-reported status.
pub(crate) fn derived_status(
    policy: &Policy,
    now: OffsetDateTime,
    grace_hours: u32,
) -> PolicyStatusEnum {
    match policy.status {
        PolicyStatusEnum::Claimed => PolicyStatusEnum::Claimed,
        PolicyStatusEnum::Expired => PolicyStatusEnum::Expired,
        PolicyStatusEnum::Active => {
            let cutoff = policy.departure_date.midnight().assume_utc()
                + Duration::hours(i64::from(grace_hours));
            if now > cutoff {
                PolicyStatusEnum::Expired
            } else {
                PolicyStatusEnum::Active
            }
        }
    }
}

pub(crate) fn policy_to_response(
    policy: &Policy,
    now: OffsetDateTime,
    grace_hours: u32,
) -> PolicyResponseDTO {
    PolicyResponseDTO {
        id: policy.id,
        airline: policy.airline.clone(),
        flight_number: policy.flight_number.clone(),
        departure_date: policy.departure_date,
        coverage_amount: policy.coverage_amount,
        premium: policy.premium,
        status: derived_status(policy, now, grace_hours),
    }
}
