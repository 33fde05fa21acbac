use crate::query::Character;
use crate::ui::mvi::UiState;

/// Observable feed snapshot handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    /// Next page to request. Starts at the configured start page.
    pub page: u32,
    /// Accumulated characters in arrival order. Never shrinks.
    pub items: Vec<Character>,
    pub is_loading: bool,
    /// Message of the most recent failed load. Not cleared by later successes.
    pub error: Option<String>,
}

/// How a renderer should treat [`FeedState::error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    /// Pagination is exhausted. Keep the list, add a "Nothing to Show" notice.
    NotFound,
    /// Anything else. Replace the list with the failure panel.
    Failure,
}

impl FeedState {
    /// State at view mount: empty, loading the first page.
    pub fn mounted(start_page: u32) -> Self {
        Self {
            page: start_page.max(1),
            items: Vec::new(),
            is_loading: true,
            error: None,
        }
    }

    /// Classify the current error by exact match against `not_found_message`.
    pub fn error_kind(&self, not_found_message: &str) -> Option<FeedErrorKind> {
        self.error.as_deref().map(|message| {
            if message == not_found_message {
                FeedErrorKind::NotFound
            } else {
                FeedErrorKind::Failure
            }
        })
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::mounted(1)
    }
}

impl UiState for FeedState {}
