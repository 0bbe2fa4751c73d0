//! Terminal client for a remote code-explanation service.
//!
//! Paste or type code, pick Python or JavaScript, and ask the service for a
//! natural-language explanation shown in an overlay panel.

pub mod clipboard;
pub mod config;
pub mod explain;
pub mod logging;
pub mod ui;
