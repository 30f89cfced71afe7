//! Events emitted during the session for front-ends to observe.
//!
//! Consumers subscribe via [`crate::RuntimeHandle::subscribe_events`] and
//! re-query the state on change instead of blocking the worker loop.
use courtside_core::Action;

/// Events published by the runtime on the broadcast channel.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The observable state changed; consumers should re-query and redraw.
    StateChanged,
    /// A control action was executed. Emitted for no-ops too, with
    /// `changed: false`, so front-ends can surface rejected input.
    ActionApplied { action: Action, changed: bool },
    /// The countdown reached zero and the clock stopped itself.
    ClockExpired,
}
