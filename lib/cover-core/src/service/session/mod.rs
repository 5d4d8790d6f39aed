pub mod service;

use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::model::session::AccountId;
use crate::provider::identity_provider::IdentityProvider;

/// Single source of truth for the connected identity.
pub struct SessionService {
    identity_provider: Arc<dyn IdentityProvider + Send + Sync>,
    account: watch::Sender<Option<AccountId>>,
    connecting: Mutex<()>,
}

impl SessionService {
    pub(crate) fn new(identity_provider: Arc<dyn IdentityProvider + Send + Sync>) -> Self {
        let (account, _) = watch::channel(None);
        Self {
            identity_provider,
            account,
            connecting: Mutex::new(()),
        }
    }
}
