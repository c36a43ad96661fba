//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - A command being issued (request started)
/// - A server response (data loaded, request failed)
/// - Local session events (logout, dismissing an error)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
