//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Requests made by the caller (start a load)
/// - Outcomes of remote calls (load succeeded, item stored)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
