//! Owner of the explain session.

use crate::explain::{ExplainError, ExplainRequest, ExplainResponse, ExplainService, Language};
use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::reducer::SessionReducer;
use super::state::{ExplainSession, ResponsePolicy};

/// A dispatched request waiting for its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExplain {
    pub generation: u64,
    pub request: ExplainRequest,
}

/// Single-owner store around [`ExplainSession`].
///
/// All mutation goes through [`SessionReducer`]. The store itself does not
/// guard against overlapping requests; that is left to the caller and to
/// the session's [`ResponsePolicy`].
#[derive(Debug, Default)]
pub struct SessionStore {
    state: ExplainSession,
}

impl SessionStore {
    pub fn new(language: Language, policy: ResponsePolicy) -> Self {
        Self {
            state: ExplainSession::new(language, policy),
        }
    }

    pub fn state(&self) -> &ExplainSession {
        &self.state
    }

    pub fn dispatch(&mut self, intent: SessionIntent) {
        self.state = SessionReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.dispatch(SessionIntent::SetCode(code.into()));
    }

    pub fn set_language(&mut self, language: Language) {
        self.dispatch(SessionIntent::SetLanguage(language));
    }

    /// Enter the loading state and build the request to send.
    ///
    /// `code` and `language` are captured here; later edits to the session
    /// do not change the request.
    pub fn begin_explain(&mut self, code: impl Into<String>, language: Language) -> PendingExplain {
        let generation = self.state.generation() + 1;
        self.dispatch(SessionIntent::RequestStarted { generation });
        tracing::debug!(generation, %language, "Explain request dispatched");

        PendingExplain {
            generation,
            request: ExplainRequest {
                code: code.into(),
                language,
            },
        }
    }

    /// Apply the result of the request tagged `generation`.
    pub fn complete_explain(
        &mut self,
        generation: u64,
        result: Result<ExplainResponse, ExplainError>,
    ) {
        if !self.state.accepts(generation) {
            tracing::debug!(
                generation,
                latest = self.state.generation(),
                "Ignoring response from superseded request"
            );
        }

        let intent = match result {
            Ok(response) => SessionIntent::RequestSucceeded {
                generation,
                explanation: response.explanation,
            },
            Err(err) => SessionIntent::RequestFailed {
                generation,
                message: err.to_string(),
            },
        };
        self.dispatch(intent);
    }

    /// Ask `service` to explain `code` and record the outcome.
    pub async fn explain_code<S: ExplainService>(
        &mut self,
        service: &S,
        code: impl Into<String>,
        language: Language,
    ) {
        let PendingExplain {
            generation,
            request,
        } = self.begin_explain(code, language);
        let result = service.explain(request).await;
        self.complete_explain(generation, result);
    }
}
