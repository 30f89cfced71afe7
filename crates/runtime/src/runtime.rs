//! High-level runtime orchestrator.
//!
//! The runtime owns the background workers, wires up command/event
//! channels, and exposes a builder-based API for clients to drive the
//! session.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::Duration;

use courtside_core::{GameConfig, GameState};

use crate::error::{Result, RuntimeError};
use crate::event::GameEvent;
use crate::handle::RuntimeHandle;
use crate::worker::{ClockWorker, Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Countdown tick period. One real second per game second.
    pub tick_interval: Duration,
    /// Disable to drive the countdown manually (tests, replay tools).
    pub enable_clock: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            tick_interval: Duration::from_secs(1),
            enable_clock: true,
        }
    }
}

/// Main runtime that orchestrates the scoreboard session.
///
/// Design: Runtime owns workers and coordinates shutdown.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    session_worker: JoinHandle<()>,
    clock_worker: Option<JoinHandle<()>>,
}

impl Runtime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to session events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe_events()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// Drops the last strong command sender, which ends the session
    /// worker; the clock worker follows once its weak sender fails to
    /// upgrade.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.session_worker
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        if let Some(clock_worker) = self.clock_worker {
            clock_worker.await.map_err(RuntimeError::WorkerJoin)?;
        }

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
        }
    }

    /// Override runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide an initial game state instead of the defaults.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Enable or disable the countdown clock worker.
    pub fn enable_clock(mut self, enable: bool) -> Self {
        self.config.enable_clock = enable;
        self
    }

    /// Build the runtime and spawn its workers.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Runtime {
        let initial_state = self
            .state
            .unwrap_or_else(|| GameState::new(&self.config.game_config));

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (event_tx, _event_rx) = broadcast::channel::<GameEvent>(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx.clone(), event_tx.clone());

        let session_worker = SessionWorker::new(
            initial_state,
            self.config.game_config.clone(),
            command_rx,
            event_tx,
        );
        let session_worker = tokio::spawn(session_worker.run());

        let clock_worker = self.config.enable_clock.then(|| {
            let clock = ClockWorker::new(command_tx.downgrade(), self.config.tick_interval);
            tokio::spawn(clock.run())
        });

        Runtime {
            handle,
            session_worker,
            clock_worker,
        }
    }
}
