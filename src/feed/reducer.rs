use crate::feed::intent::FeedIntent;
use crate::feed::state::FeedState;
use crate::ui::mvi::Reducer;

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::LoadStarted => FeedState {
                is_loading: true,
                ..state
            },
            FeedIntent::PageLoaded {
                page,
                characters,
                still_loading,
            } => {
                let FeedState {
                    page: current,
                    mut items,
                    error,
                    ..
                } = state;
                items.extend(characters);
                // A late duplicate of an older page must not move the cursor back.
                let next = current.max(page.saturating_add(1));
                FeedState {
                    page: next,
                    items,
                    is_loading: still_loading,
                    // Sticky: a success does not clear an earlier failure.
                    error,
                }
            }
            FeedIntent::LoadFailed {
                message,
                still_loading,
            } => FeedState {
                is_loading: still_loading,
                error: Some(message),
                ..state
            },
        }
    }
}
