//! Background tasks owning the authoritative state and the countdown.
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle),
//! executes actions via [`courtside_core::GameEngine`], and publishes
//! [`GameEvent`]s on the broadcast channel.

use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, trace};

use courtside_core::{
    Action, ExecutionOutcome, GameConfig, GameEngine, GameState, History, SystemAction,
};

use crate::event::GameEvent;

/// Commands processed by the session worker.
pub(crate) enum Command {
    /// Execute an action and reply with its outcome.
    Execute {
        action: Action,
        reply: oneshot::Sender<ExecutionOutcome>,
    },
    /// Query the current state (read-only snapshot).
    QueryState { reply: oneshot::Sender<GameState> },
    /// Countdown tick from the clock worker (fire-and-forget).
    Tick,
}

/// Background task that owns the [`GameState`] and undo history.
///
/// Single consumer of the command channel: commands are processed in
/// arrival order, so every operation is atomic with respect to the
/// snapshot it reads and the snapshot it installs.
pub(crate) struct SessionWorker {
    state: GameState,
    history: History,
    config: GameConfig,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl SessionWorker {
    pub(crate) fn new(
        state: GameState,
        config: GameConfig,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        let history = History::new(config.history_capacity);
        Self {
            state,
            history,
            config,
            command_rx,
            event_tx,
        }
    }

    /// Main worker loop. Exits when every command sender is dropped.
    pub(crate) async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!("session worker stopping (command channel closed)");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Execute { action, reply } => {
                let outcome = self.execute(&action);
                if reply.send(outcome).is_err() {
                    debug!("execute reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("query reply channel closed (caller dropped)");
                }
            }
            Command::Tick => {
                self.execute(&Action::system(SystemAction::ClockTick));
            }
        }
    }

    fn execute(&mut self, action: &Action) -> ExecutionOutcome {
        let outcome = GameEngine::new(&mut self.state, &mut self.history, &self.config)
            .execute(action);
        trace!(
            action = action.as_snake_case(),
            changed = outcome.changed,
            "executed action"
        );

        // Ticks are too frequent to narrate; their effect still surfaces
        // through StateChanged below.
        if let Action::Control(_) = action {
            let _ = self.event_tx.send(GameEvent::ActionApplied {
                action: action.clone(),
                changed: outcome.changed,
            });
        }
        if outcome.changed {
            let _ = self.event_tx.send(GameEvent::StateChanged);
        }
        if outcome.clock_expired {
            debug!("countdown expired");
            let _ = self.event_tx.send(GameEvent::ClockExpired);
        }

        outcome
    }
}

/// Sends one [`Command::Tick`] per interval until the session ends.
///
/// Holds only a weak sender so the clock alone never keeps the command
/// channel (and therefore the session worker) alive. Tick evaluation
/// lives in the core transition, so a tick that lands while the clock is
/// stopped degrades to a no-op.
pub(crate) struct ClockWorker {
    command_tx: mpsc::WeakSender<Command>,
    tick_interval: Duration,
}

impl ClockWorker {
    pub(crate) fn new(command_tx: mpsc::WeakSender<Command>, tick_interval: Duration) -> Self {
        Self {
            command_tx,
            tick_interval,
        }
    }

    pub(crate) async fn run(self) {
        let mut interval = time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick completes immediately; swallow it so
        // the countdown starts a full interval after launch.
        interval.tick().await;

        loop {
            interval.tick().await;
            let Some(tx) = self.command_tx.upgrade() else {
                break;
            };
            if tx.send(Command::Tick).await.is_err() {
                break;
            }
        }
        debug!("clock worker stopping (session ended)");
    }
}
