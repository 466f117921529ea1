/// Marker trait for state objects.
///
/// States are cloned rather than shared, and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
