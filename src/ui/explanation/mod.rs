//! Explanation overlay feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Visibility and scroll
//! - `intent.rs` - Open/close/scroll actions
//! - `reducer.rs` - State transitions
//! - `panel.rs` - Rendering

mod intent;
mod panel;
mod reducer;
mod state;

pub use intent::PanelIntent;
pub use panel::{max_scroll, render_explanation_panel};
pub use reducer::PanelReducer;
pub use state::PanelState;
