//! Action domain: every way the scoreboard can change.
//!
//! Actions are routed through [`engine::GameEngine`](crate::engine::GameEngine),
//! which owns the snapshot-then-apply protocol. The enum is split in the
//! same shape as the rest of the codebase: [`ControlAction`] for
//! caller-initiated operations and [`SystemAction`] for transitions the
//! runtime originates itself (the clock tick).

use crate::state::{PlayerId, Team};

/// Caller-initiated scoreboard operations.
///
/// All operations are infallible: unknown player ids and out-of-range
/// requests degrade to no-ops rather than errors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlAction {
    /// Start or stop the countdown. Not undoable: a transient control,
    /// not a scored event.
    ToggleClock,
    /// Stop the clock and restore the full period length.
    ResetClock,
    /// Add points to one side. Negative values clamp the score at zero.
    AddScore { team: Team, points: i32 },
    /// Add one team foul.
    AddTeamFoul { team: Team },
    /// Zero one side's fouls, or both when `team` is `None`.
    ResetTeamFouls { team: Option<Team> },
    /// Flip the possession indicator.
    TogglePossession,
    /// Create a player with a fresh id and insert them in jersey order.
    AddPlayer { team: Team, jersey: String },
    /// Remove a player by id. Unknown ids are a no-op.
    RemovePlayer { team: Team, player: PlayerId },
    /// Increment a player's fouls AND the team's fouls in one transition.
    /// Unknown ids are a complete no-op (neither count moves).
    AddPlayerFoul { team: Team, player: PlayerId },
    /// Advance to the next period: reset clock and team fouls. No-op once
    /// the final period has been reached.
    NextPeriod,
    /// Zero one side's score, or both when `team` is `None`.
    ResetScore { team: Option<Team> },
    /// Restore defaults, keeping rosters (with player fouls zeroed) and
    /// team names.
    ResetGame,
    /// Set a side's display name verbatim. Not undoable.
    SetTeamName { team: Team, name: String },
    /// Restore the most recent undoable snapshot. No-op when the history
    /// is empty.
    Undo,
}

/// Transitions originated by the runtime rather than a caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemAction {
    /// One second of game time elapsed. Decrements the running clock and
    /// stops it when it reaches zero. Never pushes history: undo must not
    /// have to unwind eighteen minutes one second at a time.
    ClockTick,
}

/// Top-level action routed through the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Control(ControlAction),
    System(SystemAction),
}

impl Action {
    pub fn control(action: ControlAction) -> Self {
        Self::Control(action)
    }

    pub fn system(action: SystemAction) -> Self {
        Self::System(action)
    }

    /// Whether executing this action snapshots the pre-image for undo.
    ///
    /// The engine additionally skips the push when the action turns out
    /// to be a no-op, so this is a necessary condition, not a sufficient
    /// one.
    pub fn pushes_history(&self) -> bool {
        match self {
            Action::System(_) => false,
            Action::Control(control) => !matches!(
                control,
                ControlAction::ToggleClock
                    | ControlAction::SetTeamName { .. }
                    | ControlAction::Undo
            ),
        }
    }

    /// Returns the snake_case label of the action, used for logging.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::System(SystemAction::ClockTick) => "clock_tick",
            Action::Control(control) => match control {
                ControlAction::ToggleClock => "toggle_clock",
                ControlAction::ResetClock => "reset_clock",
                ControlAction::AddScore { .. } => "add_score",
                ControlAction::AddTeamFoul { .. } => "add_team_foul",
                ControlAction::ResetTeamFouls { .. } => "reset_team_fouls",
                ControlAction::TogglePossession => "toggle_possession",
                ControlAction::AddPlayer { .. } => "add_player",
                ControlAction::RemovePlayer { .. } => "remove_player",
                ControlAction::AddPlayerFoul { .. } => "add_player_foul",
                ControlAction::NextPeriod => "next_period",
                ControlAction::ResetScore { .. } => "reset_score",
                ControlAction::ResetGame => "reset_game",
                ControlAction::SetTeamName { .. } => "set_team_name",
                ControlAction::Undo => "undo",
            },
        }
    }
}

impl From<ControlAction> for Action {
    fn from(action: ControlAction) -> Self {
        Self::Control(action)
    }
}

impl From<SystemAction> for Action {
    fn from(action: SystemAction) -> Self {
        Self::System(action)
    }
}
