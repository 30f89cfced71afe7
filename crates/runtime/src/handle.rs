//! Client-facing handle to interact with the runtime.
use tokio::sync::{broadcast, mpsc, oneshot};

use courtside_core::{Action, ControlAction, ExecutionOutcome, GameState};

use crate::error::{Result, RuntimeError};
use crate::event::GameEvent;
use crate::worker::Command;

/// Cloneable façade over the session worker's channels.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Executes an action and waits for its outcome.
    pub async fn execute_action(&self, action: Action) -> Result<ExecutionOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Execute {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Convenience wrapper for caller-initiated operations.
    pub async fn execute(&self, action: ControlAction) -> Result<ExecutionOutcome> {
        self.execute_action(Action::control(action)).await
    }

    /// Queries a snapshot of the current state.
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribes to session events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.event_tx.subscribe()
    }
}
