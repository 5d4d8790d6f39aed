use time::Date;

use crate::model::policy::{PolicyId, PolicyStatusEnum};

/// Raw purchase form input. The departure date arrives as entered and is
/// parsed during validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatePolicyRequestDTO {
    pub airline: String,
    pub flight_number: String,
    pub departure_date: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PolicyResponseDTO {
    pub id: PolicyId,
    pub airline: String,
    pub flight_number: String,
    pub departure_date: Date,
    pub coverage_amount: u64,
    pub premium: u64,
    /// Derived at read time, see `mapper::derived_status`.
    pub status: PolicyStatusEnum,
}
