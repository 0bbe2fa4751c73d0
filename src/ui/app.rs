use crate::clipboard::{ClipboardError, ClipboardHandler};
use crate::config::Config;
use crate::explain::{ExplainError, ExplainResponse, Language};
use crate::ui::editor::Editor;
use crate::ui::explanation::{max_scroll, PanelIntent, PanelReducer, PanelState};
use crate::ui::layout::{layout_regions, panel_rect};
use crate::ui::mvi::Reducer;
use crate::ui::session::{ExplainSession, PendingExplain, SessionIntent, SessionStore};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

/// Work the UI hands to the background runtime.
#[derive(Debug)]
pub enum UiCommand {
    Explain(PendingExplain),
}

pub type UiCommandSender = mpsc::UnboundedSender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    session: SessionStore,
    editor: Editor,
    /// State of the explanation overlay (MVI pattern).
    panel: PanelState,
    tab_width: u8,
    /// Spinner frame, advanced while a request is loading.
    tick: u8,
    /// One-line feedback shown in the footer (clipboard results).
    status_message: Option<String>,
    command_tx: Option<UiCommandSender>,
    /// Screen area of the last drawn frame; bounds panel scrolling.
    viewport: Rect,
    /// Opened on first copy and kept: on X11/Wayland the copied text is
    /// only served while the handle is alive.
    clipboard: Option<ClipboardHandler>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            session: SessionStore::new(config.defaults.language, config.defaults.response_policy),
            editor: Editor::default(),
            panel: PanelState::default(),
            tab_width: config.ui.tab_width,
            tick: 0,
            status_message: None,
            command_tx: None,
            viewport: Rect::default(),
            clipboard: None,
        }
    }

    /// Connect the channel explain requests are sent on.
    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.command_tx = Some(sender);
    }

    pub fn session(&self) -> &ExplainSession {
        self.session.state()
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn tab_width(&self) -> u8 {
        self.tab_width
    }

    pub fn tick(&self) -> u8 {
        self.tick
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Record the area the UI was last drawn into.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    pub fn on_tick(&mut self) {
        if self.session().is_loading() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    /// Replace the whole code buffer, e.g. with a file given on the command line.
    pub fn load_code(&mut self, code: impl Into<String>) {
        self.session.set_code(code);
        self.editor = Editor::at_end(self.session().code());
    }

    pub fn set_language(&mut self, language: Language) {
        self.session.set_language(language);
    }

    pub fn cycle_language(&mut self) {
        let next = self.session().language().next();
        self.set_language(next);
    }

    // -- Editing --------------------------------------------------------------

    /// Run `edit` against a copy of the code and store the result if it changed.
    fn edit_code<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut Editor, &mut String),
    {
        let mut code = self.session().code().to_string();
        edit(&mut self.editor, &mut code);
        if code != self.session().code() {
            self.session.dispatch(SessionIntent::SetCode(code));
        }
        self.status_message = None;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.edit_code(|editor, code| editor.insert_char(code, ch));
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn insert_tab(&mut self) {
        let width = self.tab_width;
        self.edit_code(|editor, code| editor.insert_tab(code, width));
    }

    pub fn backspace(&mut self) {
        self.edit_code(|editor, code| {
            editor.backspace(code);
        });
    }

    pub fn delete(&mut self) {
        self.edit_code(|editor, code| {
            editor.delete(code);
        });
    }

    pub fn on_paste(&mut self, text: &str) {
        if self.panel.is_visible() {
            return;
        }
        self.edit_code(|editor, code| editor.insert_str(code, text));
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let code = self.session.state().code();
        match movement {
            CursorMove::Left => self.editor.move_left(code),
            CursorMove::Right => self.editor.move_right(code),
            CursorMove::Up => self.editor.move_up(code),
            CursorMove::Down => self.editor.move_down(code),
            CursorMove::Home => self.editor.move_home(code),
            CursorMove::End => self.editor.move_end(code),
        }
    }

    // -- Explain --------------------------------------------------------------

    /// Explain the current code and open the panel.
    ///
    /// Ignored while a request is loading, like a disabled button. Returns
    /// whether a request was dispatched.
    pub fn request_explain(&mut self) -> bool {
        if self.session().is_loading() {
            return false;
        }

        let code = self.session().code().to_string();
        let language = self.session().language();
        let pending = self.session.begin_explain(code, language);
        let generation = pending.generation;
        self.tick = 0;
        dispatch_mvi!(self, panel, PanelReducer, PanelIntent::Open);

        let sent = self
            .command_tx
            .as_ref()
            .is_some_and(|tx| tx.send(UiCommand::Explain(pending)).is_ok());

        if !sent {
            tracing::error!(generation, "Explain worker unavailable");
            self.session.dispatch(SessionIntent::RequestFailed {
                generation,
                message: "Explain worker is not running".to_string(),
            });
        }
        true
    }

    /// Apply the outcome of a background explain request.
    pub fn on_explain_finished(
        &mut self,
        generation: u64,
        result: Result<ExplainResponse, ExplainError>,
    ) {
        self.session.complete_explain(generation, result);
    }

    // -- Explanation panel ----------------------------------------------------

    pub fn toggle_panel(&mut self) {
        dispatch_mvi!(self, panel, PanelReducer, PanelIntent::Toggle);
    }

    pub fn close_panel(&mut self) {
        dispatch_mvi!(self, panel, PanelReducer, PanelIntent::Close);
    }

    pub fn scroll_panel_up(&mut self, lines: u16) {
        dispatch_mvi!(self, panel, PanelReducer, PanelIntent::ScrollUp(lines));
    }

    pub fn scroll_panel_down(&mut self, lines: u16) {
        let max = self.panel_max_scroll();
        dispatch_mvi!(
            self,
            panel,
            PanelReducer,
            PanelIntent::ScrollDown { lines, max }
        );
    }

    fn panel_max_scroll(&self) -> u16 {
        let (_, body, _) = layout_regions(self.viewport);
        max_scroll(self.session(), panel_rect(body))
    }

    // -- Clipboard ------------------------------------------------------------

    /// Copy the text shown in the panel to the system clipboard.
    pub fn copy_explanation(&mut self) {
        let text = self.session().display_text().to_string();
        if text.is_empty() {
            self.status_message = Some("Nothing to copy yet".to_string());
            return;
        }

        let result = self
            .clipboard()
            .and_then(|clipboard| clipboard.set_text(&text));

        self.status_message = Some(match result {
            Ok(()) => "Copied explanation to clipboard".to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard copy failed");
                err.to_string()
            }
        });
    }

    fn clipboard(&mut self) -> Result<&mut ClipboardHandler, ClipboardError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => ClipboardHandler::new()?,
        };
        Ok(self.clipboard.insert(clipboard))
    }
}

/// Cursor movements the editor understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}
