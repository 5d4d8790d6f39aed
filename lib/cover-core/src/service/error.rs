use thiserror::Error;
use time::Date;

use crate::model::policy::PolicyId;
use crate::provider::evidence_store::EvidenceStoreError;
use crate::provider::identity_provider::IdentityProviderError;
use crate::provider::policy_ledger::PolicyLedgerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Identity provider error: `{0}`")]
    IdentityProvider(#[from] IdentityProviderError),

    #[error("Policy ledger error: `{0}`")]
    PolicyLedger(#[from] PolicyLedgerError),

    #[error("Evidence store error: `{0}`")]
    EvidenceStore(#[from] EvidenceStoreError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Policy `{0}` not found")]
    Policy(PolicyId),
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Wallet connection already in progress")]
    AlreadyConnecting,

    #[error("No wallet connected")]
    SessionNotConnected,

    #[error("Policy `{0}` is not eligible for a new claim")]
    IneligiblePolicy(PolicyId),
}

/// Bad local input. No collaborator call was made; correcting the input and
/// retrying always recovers.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Airline must not be empty")]
    AirlineMissing,

    #[error("Flight number must not be empty")]
    FlightNumberMissing,

    #[error("Departure date `{0}` is not a valid date")]
    DepartureDateInvalid(String),

    #[error("Departure date `{0}` is in the past")]
    DepartureDateInPast(Date),

    #[error("Delay of {got} hours is below the threshold of {threshold} hours")]
    DelayBelowThreshold { got: u32, threshold: u32 },

    #[error("Evidence file is missing or empty")]
    EvidenceMissing,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCode {
    Session001,
    Session002,
    Session003,
    Session004,

    Policy001,
    Policy002,
    Policy003,

    Claim001,
    Claim002,
    Claim003,

    Validation,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Session001 => "Wallet provider unavailable",
            ErrorCode::Session002 => "Wallet connection rejected",
            ErrorCode::Session003 => "Wallet connection already in progress",
            ErrorCode::Session004 => "No wallet connected",

            ErrorCode::Policy001 => "Policy not found",
            ErrorCode::Policy002 => "Policy list load failed",
            ErrorCode::Policy003 => "Policy purchase failed",

            ErrorCode::Claim001 => "Policy not eligible for a new claim",
            ErrorCode::Claim002 => "Claim submission failed",
            ErrorCode::Claim003 => "Evidence upload failed",

            ErrorCode::Validation => "Invalid input",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(_) => ErrorCode::Validation,
            ServiceError::IdentityProvider(error) => match error {
                IdentityProviderError::ProviderUnavailable => ErrorCode::Session001,
                IdentityProviderError::ConnectionRejected(_) => ErrorCode::Session002,
            },
            ServiceError::PolicyLedger(error) => match error {
                PolicyLedgerError::LoadFailed(_) => ErrorCode::Policy002,
                PolicyLedgerError::PurchaseFailed(_) => ErrorCode::Policy003,
                PolicyLedgerError::SubmissionFailed(_) => ErrorCode::Claim002,
            },
            ServiceError::EvidenceStore(EvidenceStoreError::UploadFailed(_)) => {
                ErrorCode::Claim003
            }
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Policy(_) => ErrorCode::Policy001,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::AlreadyConnecting => ErrorCode::Session003,
            BusinessLogicError::SessionNotConnected => ErrorCode::Session004,
            BusinessLogicError::IneligiblePolicy(_) => ErrorCode::Claim001,
        }
    }
}
