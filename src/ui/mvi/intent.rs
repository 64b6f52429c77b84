/// Marker trait for intents: user actions or timer events that a reducer
/// turns into a new state.
pub trait Intent: Send + 'static {}
