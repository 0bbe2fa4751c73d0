//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user edits (typing, picking a language) or results
/// posted back by background work (an explain response).
pub trait Intent: Send + 'static {}
