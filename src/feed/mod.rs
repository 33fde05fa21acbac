//! Paged feed core.
//!
//! ```text
//! ScrollEvents ──→ TriggerPolicy ──→ PagedFeedController ──→ QueryClient
//!                                          │
//!                               FeedIntent │ FeedReducer
//!                                          ↓
//!                                      FeedStore ──→ renderer (watch)
//! ```
//!
//! [`FeedView`] ties one controller and one scroll subscription to a view
//! lifetime: mounting fires the initial load, unmounting tears both down.

mod controller;
mod intent;
mod reducer;
mod scroll;
mod state;
mod store;
mod view;

pub use controller::PagedFeedController;
pub use intent::FeedIntent;
pub use reducer::FeedReducer;
pub use scroll::{ScrollEvents, TriggerPolicy, Viewport};
pub use state::{FeedErrorKind, FeedState};
pub use store::FeedStore;
pub use view::FeedView;
