//! Intents for the explanation panel.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum PanelIntent {
    /// Show the panel scrolled to the top.
    Open,

    /// Hide the panel.
    Close,

    /// Open when hidden, close when visible.
    Toggle,

    /// Scroll up by this many lines.
    ScrollUp(u16),

    /// Scroll down by this many lines, never past `max`.
    ScrollDown { lines: u16, max: u16 },
}

impl Intent for PanelIntent {}
