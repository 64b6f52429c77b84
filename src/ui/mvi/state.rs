/// Marker trait for renderable state.
///
/// `Default` is the resting state; `PartialEq` lets the view skip
/// redundant redraws; `Send` lets timer tasks hold it.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
