/// What happened to the result of a completed registry load.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadOutcome {
    /// The completed load replaced the visible set.
    Applied,
    /// The load was invalidated while in flight; its result was dropped
    /// without touching the visible set.
    Superseded,
}
