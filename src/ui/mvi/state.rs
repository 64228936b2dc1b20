/// Marker trait for screen state.
///
/// `Default` is the state a screen starts in; `App` uses it with
/// `std::mem::take` when dispatching.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
