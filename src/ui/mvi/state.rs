/// Marker trait for renderable state snapshots.
///
/// Snapshots are cloned out to renderers and compared to skip redundant
/// redraws.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
