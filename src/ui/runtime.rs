use crate::config::Config;
use crate::explain::ExplainService;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_explain_worker;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive UI until the user quits.
///
/// Explain requests are executed on `handle`; everything else happens on
/// the calling thread.
pub fn run<S>(
    config: &Config,
    service: S,
    initial_code: Option<String>,
    handle: &Handle,
) -> io::Result<()>
where
    S: ExplainService + 'static,
{
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config);
    if let Some(code) = initial_code {
        app.load_code(code);
    }
    let events = EventHandler::new(tick_rate);
    app.attach_commands(spawn_explain_worker(handle, service, events.sender()));
    tracing::info!(language = %app.session().language(), "UI started");

    loop {
        let completed = terminal.draw(|frame| draw(frame, &app))?;
        app.set_viewport(completed.area);
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => terminal.autoresize()?,
            Ok(AppEvent::ExplainFinished { generation, result }) => {
                app.on_explain_finished(generation, result)
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("UI stopped");
    drop(guard);
    Ok(())
}
