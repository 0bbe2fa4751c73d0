//! Intents for the explain session.

use crate::explain::Language;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionIntent {
    /// Replace the code text.
    SetCode(String),

    /// Select a language.
    SetLanguage(Language),

    /// An explain request was dispatched with this generation.
    RequestStarted { generation: u64 },

    /// The request with this generation returned an explanation.
    RequestSucceeded { generation: u64, explanation: String },

    /// The request with this generation failed.
    RequestFailed { generation: u64, message: String },
}

impl Intent for SessionIntent {}
