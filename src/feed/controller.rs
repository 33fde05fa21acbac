//! Pagination state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::feed::intent::FeedIntent;
use crate::feed::state::FeedState;
use crate::feed::store::FeedStore;
use crate::query::QueryClient;

/// Drives paged retrieval into a [`FeedStore`].
///
/// Cheap to clone; clones share the same store and teardown flag so a load
/// can be moved onto a task while the view keeps its own handle.
#[derive(Clone)]
pub struct PagedFeedController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    client: Arc<dyn QueryClient>,
    store: FeedStore,
    torn_down: AtomicBool,
}

impl PagedFeedController {
    pub fn new(client: Arc<dyn QueryClient>, start_page: u32) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                client,
                store: FeedStore::new(FeedState::mounted(start_page)),
                torn_down: AtomicBool::new(false),
            }),
        }
    }

    /// Request the current page and fold the outcome into state.
    ///
    /// Callers may invoke this while another load is in flight. Both loads
    /// ask for the same page and both append on resolution.
    pub async fn load_next_page(&self) {
        if self.is_torn_down() {
            tracing::debug!("Load requested after teardown, ignoring");
            return;
        }

        let page = self.inner.store.begin_load();
        tracing::debug!(page, "Loading page");

        let result = self.inner.client.fetch_page(page).await;

        if self.is_torn_down() {
            self.inner.store.abandon_load();
            tracing::debug!(page, "View torn down, discarding load result");
            return;
        }

        match result {
            Ok(characters) => {
                tracing::info!(page, count = characters.len(), "Page loaded");
                self.inner
                    .store
                    .finish_load(|still_loading| FeedIntent::PageLoaded {
                        page,
                        characters,
                        still_loading,
                    });
            }
            Err(err) => {
                tracing::warn!(page, error = %err, "Page load failed");
                let message = err.to_string();
                self.inner
                    .store
                    .finish_load(|still_loading| FeedIntent::LoadFailed {
                        message,
                        still_loading,
                    });
            }
        }
    }

    /// Discard every state write from now on. In-flight queries still run.
    pub fn tear_down(&self) {
        if !self.inner.torn_down.swap(true, Ordering::SeqCst) {
            tracing::debug!("Feed controller torn down");
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.torn_down.load(Ordering::SeqCst)
    }

    /// Number of queries awaiting a response.
    pub fn in_flight(&self) -> usize {
        self.inner.store.in_flight()
    }

    pub fn state(&self) -> FeedState {
        self.inner.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.inner.store.subscribe()
    }
}
