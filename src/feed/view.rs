//! Mount/unmount lifecycle for one feed view.

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::config::FeedConfig;
use crate::feed::controller::PagedFeedController;
use crate::feed::scroll::{ScrollEvents, TriggerPolicy, Viewport};
use crate::feed::state::FeedState;
use crate::query::QueryClient;

/// A mounted feed: one controller plus its scroll subscription.
///
/// Dropping the view (or calling [`FeedView::unmount`]) tears the controller
/// down and stops the scroll listener.
pub struct FeedView {
    controller: PagedFeedController,
    policy: TriggerPolicy,
    listener: JoinHandle<()>,
}

impl FeedView {
    /// Mount a view: fire the first load and subscribe to `scroll`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(client: Arc<dyn QueryClient>, scroll: &ScrollEvents, feed: &FeedConfig) -> Self {
        let controller = PagedFeedController::new(client, feed.start_page);
        let policy = TriggerPolicy {
            guard_in_flight: feed.guard_in_flight,
        };
        tracing::info!(start_page = feed.start_page, "Mounting feed view");

        let initial = controller.clone();
        tokio::spawn(async move { initial.load_next_page().await });

        let listener = tokio::spawn(listen(controller.clone(), policy, scroll.subscribe()));

        Self {
            controller,
            policy,
            listener,
        }
    }

    /// Apply the trigger policy to `viewport`, spawning a load if it passes.
    pub fn on_scroll(&self, viewport: Viewport) -> bool {
        trigger(&self.controller, self.policy, viewport)
    }

    pub fn controller(&self) -> &PagedFeedController {
        &self.controller
    }

    pub fn state(&self) -> FeedState {
        self.controller.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.controller.subscribe()
    }

    pub fn unmount(self) {
        tracing::info!("Unmounting feed view");
    }
}

impl Drop for FeedView {
    fn drop(&mut self) {
        self.controller.tear_down();
        self.listener.abort();
    }
}

fn trigger(controller: &PagedFeedController, policy: TriggerPolicy, viewport: Viewport) -> bool {
    if controller.is_torn_down() || !policy.should_load(&controller.state(), &viewport) {
        return false;
    }
    let load = controller.clone();
    tokio::spawn(async move { load.load_next_page().await });
    true
}

async fn listen(
    controller: PagedFeedController,
    policy: TriggerPolicy,
    mut events: broadcast::Receiver<Viewport>,
) {
    loop {
        match events.recv().await {
            Ok(viewport) => {
                if controller.is_torn_down() {
                    break;
                }
                trigger(&controller, policy, viewport);
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::trace!(skipped, "Scroll listener lagged");
            }
            Err(RecvError::Closed) => break,
        }
    }
}
