use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must be pure. Side effects (queries, timers) belong to the caller.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
