//! Deterministic scoreboard logic shared across the runtime and clients.
//!
//! `courtside-core` defines the canonical game state (scores, fouls,
//! possession, countdown clock, rosters) and exposes pure APIs that can be
//! reused by the runtime and offline tools. All state mutation flows
//! through [`engine::GameEngine`], and supporting crates depend on the
//! types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod state;

pub use action::{Action, ControlAction, SystemAction};
pub use config::GameConfig;
pub use engine::{ExecutionOutcome, GameEngine};
pub use state::{ClockState, GameState, History, Player, PlayerId, Team, TeamState};
