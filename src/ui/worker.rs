//! Background execution of explain requests.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::explain::ExplainService;
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;

/// Spawn the task that executes [`UiCommand`]s on `handle`.
///
/// Each explain request runs in its own task, so a slow request never
/// delays a later one. Results are posted to `events` tagged with their
/// generation. The worker stops once every command sender is dropped.
pub fn spawn_explain_worker<S>(
    handle: &Handle,
    service: S,
    events: Sender<AppEvent>,
) -> UiCommandSender
where
    S: ExplainService + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<UiCommand>();
    let service = Arc::new(service);
    let spawner = handle.clone();

    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                UiCommand::Explain(pending) => {
                    let service = Arc::clone(&service);
                    let events = events.clone();
                    spawner.spawn(async move {
                        let generation = pending.generation;
                        let result = service.explain(pending.request).await;
                        if events
                            .send(AppEvent::ExplainFinished { generation, result })
                            .is_err()
                        {
                            tracing::debug!(generation, "UI gone, dropping explain result");
                        }
                    });
                }
            }
        }
        tracing::debug!("Explain worker stopped");
    });

    tx
}
