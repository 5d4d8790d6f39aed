use strum::Display;
use time::Date;
use uuid::Uuid;

pub type PolicyId = Uuid;

/// One purchased coverage contract. The descriptive attributes and the
/// numeric terms never change after purchase; `status` is the
/// ledger-reported lifecycle state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Policy {
    pub id: PolicyId,
    pub flight_number: String,
    pub airline: String,
    pub departure_date: Date,
    pub coverage_amount: u64,
    pub premium: u64,
    pub status: PolicyStatusEnum,
}

/// `Expired` and `Claimed` are terminal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum PolicyStatusEnum {
    Active,
    Expired,
    Claimed,
}
