//! Authoritative scoreboard state representation.
//!
//! This module owns the data structures that describe scores, fouls,
//! rosters, the countdown clock, and the undo history. Runtime layers
//! clone or query this state but mutate it exclusively through the engine.
pub mod history;
pub mod types;

pub use history::History;
pub use types::{ClockState, Player, PlayerId, Team, TeamState};

use crate::config::GameConfig;

/// Canonical snapshot of the scoreboard at an instant.
///
/// Cheap to clone; the engine snapshots the whole value before every
/// undoable mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Countdown clock for the current period.
    pub clock: ClockState,
    /// Current period (half), starting at 1.
    pub period: u8,
    /// Which side currently controls the ball. Pure display indicator.
    pub possession: Team,
    pub home: TeamState,
    pub guest: TeamState,

    /// Sequential player id allocator (monotonically increasing).
    ///
    /// Part of the snapshot, so undo rewinds it together with the roster
    /// it was advanced for.
    next_player_id: u32,
}

impl GameState {
    /// Creates a fresh default state: zero scores and fouls, period 1,
    /// home possession, a stopped full clock, and empty rosters.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            clock: ClockState::stopped(config.period_seconds),
            period: 1,
            possession: Team::Home,
            home: TeamState::new(GameConfig::DEFAULT_HOME_NAME),
            guest: TeamState::new(GameConfig::DEFAULT_GUEST_NAME),
            next_player_id: 0,
        }
    }

    /// Borrows the given side's state.
    pub fn team(&self, team: Team) -> &TeamState {
        match team {
            Team::Home => &self.home,
            Team::Guest => &self.guest,
        }
    }

    /// Mutably borrows the given side's state.
    pub fn team_mut(&mut self, team: Team) -> &mut TeamState {
        match team {
            Team::Home => &mut self.home,
            Team::Guest => &mut self.guest,
        }
    }

    pub fn player(&self, team: Team, id: PlayerId) -> Option<&Player> {
        self.team(team).player(id)
    }

    /// Allocates a new unique [`PlayerId`].
    ///
    /// # Panics
    ///
    /// Panics if the id space is exhausted.
    pub(crate) fn allocate_player_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next_player_id);
        self.next_player_id = self
            .next_player_id
            .checked_add(1)
            .expect("PlayerId overflow");
        id
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
