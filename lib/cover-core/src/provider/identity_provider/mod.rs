use async_trait::async_trait;
use thiserror::Error;

use crate::model::session::AccountId;

#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("Wallet provider unavailable")]
    ProviderUnavailable,
    #[error("Wallet connection rejected: `{0}`")]
    ConnectionRejected(String),
}

/// Wallet integration requesting an account from the user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider {
    async fn request_account(&self) -> Result<AccountId, IdentityProviderError>;
}
