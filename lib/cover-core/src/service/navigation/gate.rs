use super::{AccessDecision, View};
use crate::model::session::AccountId;

/// Decides whether `view` may be entered. Consulted synchronously before a
/// view renders and before its data load starts, so a disconnected session
/// never triggers a fetch.
pub(crate) fn authorize(view: &View, account: Option<&AccountId>) -> AccessDecision {
    if !view.requires_identity() || account.is_some() {
        AccessDecision::Allowed
    } else {
        AccessDecision::Denied {
            redirect: View::Landing,
        }
    }
}
