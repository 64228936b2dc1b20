/// Marker trait for intents: key presses, fetch results, navigation.
pub trait Intent: Send + 'static {}
