use crate::query::Character;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FeedIntent {
    /// A load was dispatched.
    LoadStarted,
    /// The query for `page` returned `characters`.
    ///
    /// `still_loading` is true when other loads remain in flight.
    PageLoaded {
        page: u32,
        characters: Vec<Character>,
        still_loading: bool,
    },
    /// The query failed with `message`.
    LoadFailed { message: String, still_loading: bool },
}

impl Intent for FeedIntent {}
