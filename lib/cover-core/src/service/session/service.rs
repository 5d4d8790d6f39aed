use tokio::sync::watch;

use super::SessionService;
use crate::model::session::AccountId;
use crate::service::error::{BusinessLogicError, ServiceError};

impl SessionService {
    /// Requests an account from the wallet provider and makes it the
    /// current identity.
    ///
    /// Only one attempt may be in flight at a time; an overlapping call
    /// fails with `AlreadyConnecting` instead of racing a second resolved
    /// account against the first. Provider failures leave the current
    /// identity untouched and emit no notification.
    pub async fn connect(&self) -> Result<AccountId, ServiceError> {
        let Ok(_guard) = self.connecting.try_lock() else {
            return Err(BusinessLogicError::AlreadyConnecting.into());
        };

        let account = self
            .identity_provider
            .request_account()
            .await
            .inspect_err(|error| tracing::warn!("Wallet connection failed: {error}"))?;

        self.account.send_replace(Some(account.clone()));
        tracing::info!("Connected wallet account {account}");
        Ok(account)
    }

    /// Clears the current identity. Calling while already disconnected is a
    /// no-op, not an error.
    pub fn disconnect(&self) {
        let changed = self.account.send_if_modified(|current| {
            if current.is_some() {
                *current = None;
                true
            } else {
                false
            }
        });

        if changed {
            tracing::info!("Disconnected wallet account");
        }
    }

    /// Current identity, `None` when disconnected. Pure read.
    pub fn current(&self) -> Option<AccountId> {
        self.account.borrow().clone()
    }

    /// Identity-change notifications: one update per successful connect and
    /// per effective disconnect.
    pub fn subscribe(&self) -> watch::Receiver<Option<AccountId>> {
        self.account.subscribe()
    }
}
