//! Reducer for the explanation panel.

use crate::ui::mvi::Reducer;

use super::intent::PanelIntent;
use super::state::PanelState;

pub struct PanelReducer;

impl Reducer for PanelReducer {
    type State = PanelState;
    type Intent = PanelIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PanelIntent::Open => PanelState::Visible { scroll: 0 },

            PanelIntent::Close => PanelState::Hidden,

            PanelIntent::Toggle => match state {
                PanelState::Hidden => PanelState::Visible { scroll: 0 },
                PanelState::Visible { .. } => PanelState::Hidden,
            },

            PanelIntent::ScrollUp(lines) => match state {
                PanelState::Visible { scroll } => PanelState::Visible {
                    scroll: scroll.saturating_sub(lines),
                },
                other => other,
            },

            PanelIntent::ScrollDown { lines, max } => match state {
                PanelState::Visible { scroll } => PanelState::Visible {
                    scroll: scroll.saturating_add(lines).min(max),
                },
                other => other,
            },
        }
    }
}
