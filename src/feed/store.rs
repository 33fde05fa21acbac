//! Observable holder for [`FeedState`].

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::watch;

use crate::feed::intent::FeedIntent;
use crate::feed::reducer::FeedReducer;
use crate::feed::state::FeedState;
use crate::ui::mvi::Reducer;

/// Single-writer state store. Renderers subscribe and get notified on change.
///
/// The in-flight counter is only touched inside `send_modify`, so it moves in
/// step with `is_loading` under the channel's write lock.
pub struct FeedStore {
    sender: watch::Sender<FeedState>,
    in_flight: AtomicUsize,
}

impl FeedStore {
    pub fn new(initial: FeedState) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Register a new load and return the page it should request.
    pub fn begin_load(&self) -> u32 {
        let mut page = 0;
        self.sender.send_modify(|state| {
            self.in_flight.fetch_add(1, Ordering::SeqCst);
            reduce_in_place(state, FeedIntent::LoadStarted);
            page = state.page;
        });
        page
    }

    /// Retire a load and fold its outcome into state.
    ///
    /// `outcome` receives whether other loads are still in flight.
    pub fn finish_load<F>(&self, outcome: F)
    where
        F: FnOnce(bool) -> FeedIntent,
    {
        self.sender.send_modify(|state| {
            let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
            reduce_in_place(state, outcome(remaining > 0));
        });
    }

    /// Retire a load without touching state.
    pub fn abandon_load(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    /// Loads registered and not yet retired.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> FeedState {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.sender.subscribe()
    }
}

fn reduce_in_place(state: &mut FeedState, intent: FeedIntent) {
    *state = FeedReducer::reduce(std::mem::take(state), intent);
}
