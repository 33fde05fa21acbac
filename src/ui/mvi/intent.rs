/// Marker trait for intents: load lifecycle events, user actions.
pub trait Intent: Send + 'static {}
