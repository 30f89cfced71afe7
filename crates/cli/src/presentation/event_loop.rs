//! Pumps runtime events, user input, and rendering for the client.
use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{self, Duration};

use courtside_core::GameState;
use courtside_runtime::{GameEvent, RuntimeHandle};

use crate::input::{InputHandler, KeyAction};
use crate::presentation::{terminal::Tui, ui};
use crate::state::AppState;

const FRAME_INTERVAL_MS: u64 = 16;

pub struct EventLoop {
    handle: RuntimeHandle,
    event_rx: tokio::sync::broadcast::Receiver<GameEvent>,
    input: InputHandler,
    app: AppState,
}

impl EventLoop {
    pub fn new(handle: RuntimeHandle) -> Self {
        let event_rx = handle.subscribe_events();
        Self {
            handle,
            event_rx,
            input: InputHandler::new(),
            app: AppState::new(),
        }
    }

    /// Runs until the user quits or the runtime goes away.
    ///
    /// Returns the final state snapshot for the caller to summarize.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<GameState> {
        let mut state = self.handle.query_state().await?;
        self.render(terminal, &state)?;

        loop {
            tokio::select! {
                result = self.event_rx.recv() => {
                    match result {
                        Ok(_) => {
                            self.drain_pending_events();
                            state = self.refresh(terminal).await?;
                        }
                        Err(RecvError::Closed) => {
                            tracing::warn!("event stream closed");
                            break;
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!("dropped {} stale events", skipped);
                            state = self.refresh(terminal).await?;
                        }
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal, &mut state).await? {
                        break;
                    }
                }
            }
        }

        Ok(state)
    }

    /// Collapses a burst of events into a single redraw.
    fn drain_pending_events(&mut self) {
        while self.event_rx.try_recv().is_ok() {}
    }

    async fn handle_input_tick(
        &mut self,
        terminal: &mut Tui,
        state: &mut GameState,
    ) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal, state).await
            }
            Event::Resize(_, _) => {
                self.render(terminal, state)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
        state: &mut GameState,
    ) -> Result<bool> {
        match self.input.handle_key(key, &mut self.app, state) {
            KeyAction::Quit => Ok(true),
            KeyAction::Submit(action) => {
                let outcome = self.handle.execute(action).await?;
                if outcome.changed {
                    *state = self.refresh(terminal).await?;
                } else {
                    // No-op submissions still need a redraw: the key may
                    // have closed a prompt.
                    self.render(terminal, state)?;
                }
                Ok(false)
            }
            KeyAction::None => {
                // Selection and mode changes are local to the client.
                self.render(terminal, state)?;
                Ok(false)
            }
        }
    }

    async fn refresh(&mut self, terminal: &mut Tui) -> Result<GameState> {
        let state = self.handle.query_state().await?;
        self.app.clamp_selection(&state);
        self.render(terminal, &state)?;
        Ok(state)
    }

    fn render(&mut self, terminal: &mut Tui, state: &GameState) -> Result<()> {
        ui::render(terminal, state, &self.app)
    }
}
