//! Terminal event polling
//!
//! Crossterm events are polled on a dedicated task and forwarded over a
//! channel so the main loop can `select!` between terminal input and
//! request completions. Mouse input is not used by this app.

use std::time::Duration;

use crossterm::event::{self, KeyEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Terminal input the UI reacts to.
#[derive(Clone, Debug)]
pub enum EventKind {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Spawn the polling task. The task drains crossterm's buffer before
/// exiting so a cancelled session leaves the terminal clean.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut processed = 0;
                    while processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        processed += 1;
                        if let Ok(raw) = event::read() {
                            let kind = match raw {
                                event::Event::Key(key) => Some(EventKind::Key(key)),
                                event::Event::Resize(w, h) => Some(EventKind::Resize(w, h)),
                                _ => None,
                            };
                            if let Some(kind) = kind {
                                if tx.send(kind).is_err() {
                                    debug!("event channel closed, stopping poller");
                                    return;
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
