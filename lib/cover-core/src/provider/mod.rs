pub mod evidence_store;
pub mod identity_provider;
pub mod policy_ledger;
