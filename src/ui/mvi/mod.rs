//! Model-View-Intent primitives shared by the UI features.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Every feature (`session`, `explanation`) owns a state type, an intent enum
//! and a reducer. Side effects such as network calls live outside the
//! reducer and come back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
