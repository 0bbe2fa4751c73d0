//! State for the explanation panel.

use crate::ui::mvi::UiState;

/// Visibility and scroll position of the explanation overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState {
    /// Panel is not visible; the editor has focus.
    #[default]
    Hidden,

    /// Panel covers the editor.
    Visible {
        /// First rendered line of the wrapped text.
        scroll: u16,
    },
}

impl UiState for PanelState {}

impl PanelState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    pub fn scroll(&self) -> u16 {
        match self {
            Self::Visible { scroll } => *scroll,
            Self::Hidden => 0,
        }
    }
}
