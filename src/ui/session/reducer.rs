//! Reducer for the explain session.

use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::ExplainSession;

/// Reducer for session state transitions.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = ExplainSession;
    type Intent = SessionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::SetCode(code) => state.set_code(code),

            SessionIntent::SetLanguage(language) => state.set_language(language),

            SessionIntent::RequestStarted { generation } => state.start_request(generation),

            SessionIntent::RequestSucceeded {
                generation,
                explanation,
            } => {
                if state.accepts(generation) {
                    state.finish_success(explanation);
                }
            }

            SessionIntent::RequestFailed {
                generation,
                message,
            } => {
                if state.accepts(generation) {
                    state.finish_failure(message);
                }
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::Language;
    use crate::ui::session::ResponsePolicy;

    fn loading(policy: ResponsePolicy, generation: u64) -> ExplainSession {
        SessionReducer::reduce(
            ExplainSession::new(Language::Python, policy),
            SessionIntent::RequestStarted { generation },
        )
    }

    #[test]
    fn set_code_replaces_text() {
        let state = SessionReducer::reduce(
            ExplainSession::default(),
            SessionIntent::SetCode("print(1)".into()),
        );
        assert_eq!(state.code(), "print(1)");

        let state = SessionReducer::reduce(state, SessionIntent::SetCode(String::new()));
        assert_eq!(state.code(), "");
    }

    #[test]
    fn set_language_replaces_language() {
        let state = SessionReducer::reduce(
            ExplainSession::default(),
            SessionIntent::SetLanguage(Language::Javascript),
        );
        assert_eq!(state.language(), Language::Javascript);
    }

    #[test]
    fn request_started_sets_loading_and_clears_error() {
        let failed = SessionReducer::reduce(
            loading(ResponsePolicy::LastResolved, 1),
            SessionIntent::RequestFailed {
                generation: 1,
                message: "old".into(),
            },
        );
        assert_eq!(failed.error(), Some("old"));

        let state = SessionReducer::reduce(failed, SessionIntent::RequestStarted { generation: 2 });
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn success_stores_explanation() {
        let state = SessionReducer::reduce(
            loading(ResponsePolicy::LastResolved, 1),
            SessionIntent::RequestSucceeded {
                generation: 1,
                explanation: "Prints 1".into(),
            },
        );
        assert!(!state.is_loading());
        assert_eq!(state.explanation(), "Prints 1");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failure_keeps_previous_explanation() {
        let state = SessionReducer::reduce(
            loading(ResponsePolicy::LastResolved, 1),
            SessionIntent::RequestSucceeded {
                generation: 1,
                explanation: "first".into(),
            },
        );
        let state = SessionReducer::reduce(state, SessionIntent::RequestStarted { generation: 2 });
        let state = SessionReducer::reduce(
            state,
            SessionIntent::RequestFailed {
                generation: 2,
                message: "server error".into(),
            },
        );
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("server error"));
        assert_eq!(state.explanation(), "first");
    }

    #[test]
    fn last_resolved_applies_stale_response() {
        let state = loading(ResponsePolicy::LastResolved, 2);
        let state = SessionReducer::reduce(
            state,
            SessionIntent::RequestSucceeded {
                generation: 1,
                explanation: "stale".into(),
            },
        );
        assert!(!state.is_loading());
        assert_eq!(state.explanation(), "stale");
    }

    #[test]
    fn latest_only_ignores_stale_response() {
        let state = loading(ResponsePolicy::LatestOnly, 2);
        let state = SessionReducer::reduce(
            state,
            SessionIntent::RequestFailed {
                generation: 1,
                message: "stale".into(),
            },
        );
        assert!(state.is_loading());
        assert_eq!(state.error(), None);

        let state = SessionReducer::reduce(
            state,
            SessionIntent::RequestSucceeded {
                generation: 2,
                explanation: "fresh".into(),
            },
        );
        assert!(!state.is_loading());
        assert_eq!(state.explanation(), "fresh");
    }
}
