//! Explain session feature module.
//!
//! Holds the code being edited, the selected language and the outcome of the
//! last explain request.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Session state and response policy
//! - `intent.rs` - Edits and request lifecycle events
//! - `reducer.rs` - State transitions
//! - `store.rs` - Owner that runs requests against an `ExplainService`

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{ExplainSession, ResponsePolicy};
pub use store::{PendingExplain, SessionStore};
