//! Base trait for UI state.

/// Marker trait for state objects.
///
/// States are replaced wholesale by reducers, so they need `Default` (to be
/// taken out of their owner), `Clone` and `PartialEq` (to compare snapshots
/// in tests and detect changes).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
