//! The event/action loop
//!
//! One cooperative loop owns the state: terminal events map to actions,
//! actions run through the reducer, effects spawn HTTP tasks whose
//! completion actions land on the same channel. Completions are applied in
//! the order they arrive, not the order their requests were issued; there
//! is no correlation and no cancellation, so overlapping submissions race
//! and the last writer wins.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{Frame, Terminal, backend::Backend};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::action::Action;
use crate::api::ApiClient;
use crate::effect::Effect;
use crate::event::{EventKind, spawn_event_poller};
use crate::reducer::reducer;
use crate::state::AppState;

const POLL_TIMEOUT: Duration = Duration::from_millis(10);
const LOOP_SLEEP: Duration = Duration::from_millis(16);

pub struct Runtime {
    state: AppState,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    client: Arc<ApiClient>,
    should_render: bool,
}

impl Runtime {
    pub fn new(state: AppState, client: ApiClient) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state,
            action_tx,
            action_rx,
            client: Arc::new(client),
            should_render: true,
        }
    }

    /// Send an action into the queue from outside the loop.
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run until a `Quit` action arrives.
    pub async fn run<B, FRender, FEvent>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, &AppState),
        FEvent: FnMut(&EventKind, &AppState) -> Vec<Action>,
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, POLL_TIMEOUT, LOOP_SLEEP, cancel_token.clone());

        loop {
            if self.should_render {
                terminal.draw(|frame| render(frame, &self.state))?;
                self.should_render = false;
            }

            tokio::select! {
                Some(event) = event_rx.recv() => {
                    for action in map_event(&event, &self.state) {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if matches!(action, Action::Quit) {
                        break;
                    }
                    debug!(action = action.name(), "dispatch");
                    let result = reducer(&mut self.state, action);
                    for effect in result.effects {
                        self.handle_effect(effect);
                    }
                    self.should_render = result.changed;
                }

                else => break,
            }
        }

        cancel_token.cancel();
        Ok(())
    }

    fn handle_effect(&self, effect: Effect) {
        match effect {
            Effect::Request { op, request } => {
                let client = Arc::clone(&self.client);
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    // a closed receiver means the loop is shutting down
                    let _ = tx.send(client.execute(op, request).await);
                });
            }
        }
    }
}
