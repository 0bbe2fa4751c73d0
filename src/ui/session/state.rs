//! State of the explain session.

use serde::{Deserialize, Serialize};

use crate::explain::Language;
use crate::ui::mvi::UiState;

/// How a response from a superseded request is treated.
///
/// Requests are never cancelled, so when a second request is dispatched
/// before the first resolves both responses eventually arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponsePolicy {
    /// Every resolution is applied; the last one to arrive wins.
    #[default]
    LastResolved,
    /// Only the most recently dispatched request may update the session.
    LatestOnly,
}

/// The code, language and last explain result of the running application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplainSession {
    code: String,
    language: Language,
    explanation: String,
    is_loading: bool,
    error: Option<String>,
    /// Generation of the most recently dispatched request (0 = none yet).
    generation: u64,
    policy: ResponsePolicy,
}

impl UiState for ExplainSession {}

impl ExplainSession {
    /// Empty session starting on `language`.
    pub fn new(language: Language, policy: ResponsePolicy) -> Self {
        Self {
            language,
            policy,
            ..Self::default()
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Last successful explanation; empty until the first success.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    /// Text the explanation panel shows: the error when set, otherwise the
    /// explanation.
    pub fn display_text(&self) -> &str {
        self.error().unwrap_or(&self.explanation)
    }

    /// Whether a resolution for `generation` may update this session.
    pub fn accepts(&self, generation: u64) -> bool {
        match self.policy {
            ResponsePolicy::LastResolved => true,
            ResponsePolicy::LatestOnly => generation == self.generation,
        }
    }

    pub(super) fn set_code(&mut self, code: String) {
        self.code = code;
    }

    pub(super) fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub(super) fn start_request(&mut self, generation: u64) {
        self.generation = generation;
        self.is_loading = true;
        self.error = None;
    }

    pub(super) fn finish_success(&mut self, explanation: String) {
        self.is_loading = false;
        self.explanation = explanation;
    }

    pub(super) fn finish_failure(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }
}
