//! Scroll observation and the scroll-driven load policy.

use tokio::sync::broadcast;

use crate::feed::state::FeedState;

const SCROLL_CHANNEL_CAPACITY: usize = 64;

/// Visible window over the rendered document, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible row.
    pub offset: u32,
    /// Visible rows.
    pub height: u32,
    /// Total rows of the document.
    pub content_height: u32,
}

impl Viewport {
    pub fn new(offset: u32, height: u32, content_height: u32) -> Self {
        Self {
            offset,
            height,
            content_height,
        }
    }

    /// True when the viewport's bottom edge has reached the document's.
    pub fn is_at_bottom(&self) -> bool {
        self.offset.saturating_add(self.height) >= self.content_height
    }
}

/// Process-wide scroll position feed.
///
/// Producers publish every viewport change; each mounted view holds its own
/// receiver and drops it at unmount.
#[derive(Clone)]
pub struct ScrollEvents {
    sender: broadcast::Sender<Viewport>,
}

impl ScrollEvents {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(SCROLL_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publish a viewport. Returns how many subscribers received it.
    pub fn publish(&self, viewport: Viewport) -> usize {
        self.sender.send(viewport).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Viewport> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ScrollEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// Decides whether a scroll event should trigger `load_next_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerPolicy {
    /// Also refuse while a load is in flight.
    pub guard_in_flight: bool,
}

impl TriggerPolicy {
    pub fn should_load(&self, state: &FeedState, viewport: &Viewport) -> bool {
        // Any error, including end-of-data, stops automatic paging until remount.
        if state.error.is_some() {
            return false;
        }
        if self.guard_in_flight && state.is_loading {
            return false;
        }
        viewport.is_at_bottom()
    }
}
