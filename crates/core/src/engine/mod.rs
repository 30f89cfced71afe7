//! The authoritative reducer for [`GameState`].
//!
//! Every mutation, caller-initiated or system-originated, flows through
//! [`GameEngine::execute`]: snapshot the pre-image, apply the transition,
//! and push the pre-image onto the undo history when the state actually
//! changed and the action is undoable. Side effects are limited to
//! history mutation and state replacement; no I/O.

mod transition;

use crate::action::{Action, ControlAction};
use crate::config::GameConfig;
use crate::state::{GameState, History};

/// Outcome metadata for a single executed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Whether the installed state differs from the pre-image.
    pub changed: bool,
    /// Whether this execution ran the countdown down to zero.
    pub clock_expired: bool,
}

impl ExecutionOutcome {
    const NOOP: Self = Self {
        changed: false,
        clock_expired: false,
    };
}

/// Wraps mutable access to the session's state and undo history.
///
/// Execution never fails: invalid inputs leave the state untouched and
/// report `changed: false`.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    history: &'a mut History,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, history: &'a mut History, config: &'a GameConfig) -> Self {
        Self {
            state,
            history,
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action against the current state.
    ///
    /// No-op executions (unknown ids, period already capped, empty undo
    /// history) do not push a history entry, so undo never has to step
    /// through entries that change nothing.
    pub fn execute(&mut self, action: &Action) -> ExecutionOutcome {
        if matches!(action, Action::Control(ControlAction::Undo)) {
            return self.undo();
        }

        let before = self.state.clone();
        transition::apply(action, self.state, self.config);

        let changed = *self.state != before;
        let clock_expired = changed
            && before.clock.is_running
            && !self.state.clock.is_running
            && self.state.clock.is_expired();

        if changed && action.pushes_history() {
            self.history.push(before);
        }

        ExecutionOutcome {
            changed,
            clock_expired,
        }
    }

    fn undo(&mut self) -> ExecutionOutcome {
        match self.history.pop() {
            Some(snapshot) => {
                let changed = snapshot != *self.state;
                *self.state = snapshot;
                ExecutionOutcome {
                    changed,
                    clock_expired: false,
                }
            }
            None => ExecutionOutcome::NOOP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::SystemAction;
    use crate::state::{PlayerId, Team};

    struct Session {
        state: GameState,
        history: History,
        config: GameConfig,
    }

    impl Session {
        fn new() -> Self {
            let config = GameConfig::default();
            Self {
                state: GameState::new(&config),
                history: History::new(config.history_capacity),
                config,
            }
        }

        fn execute(&mut self, action: impl Into<Action>) -> ExecutionOutcome {
            GameEngine::new(&mut self.state, &mut self.history, &self.config)
                .execute(&action.into())
        }
    }

    #[test]
    fn undo_restores_exact_prior_snapshot() {
        let mut session = Session::new();
        let before = session.state.clone();

        session.execute(ControlAction::AddScore {
            team: Team::Home,
            points: 3,
        });
        assert_eq!(session.state.home.score, 3);

        let outcome = session.execute(ControlAction::Undo);
        assert!(outcome.changed);
        assert_eq!(session.state, before);
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut session = Session::new();
        let before = session.state.clone();

        let outcome = session.execute(ControlAction::Undo);
        assert!(!outcome.changed);
        assert_eq!(session.state, before);
    }

    #[test]
    fn toggle_clock_is_not_undoable() {
        let mut session = Session::new();
        session.execute(ControlAction::ToggleClock);
        assert!(session.state.clock.is_running);
        assert!(session.history.is_empty());

        // Undo with only non-undoable mutations behind us does nothing.
        let outcome = session.execute(ControlAction::Undo);
        assert!(!outcome.changed);
        assert!(session.state.clock.is_running);
    }

    #[test]
    fn set_team_name_is_not_undoable() {
        let mut session = Session::new();
        session.execute(ControlAction::SetTeamName {
            team: Team::Guest,
            name: "Visitors".into(),
        });
        assert_eq!(session.state.guest.name, "Visitors");
        assert!(session.history.is_empty());
    }

    #[test]
    fn noop_operations_do_not_push_history() {
        let mut session = Session::new();

        session.execute(ControlAction::RemovePlayer {
            team: Team::Home,
            player: PlayerId(99),
        });
        session.execute(ControlAction::AddPlayerFoul {
            team: Team::Guest,
            player: PlayerId(99),
        });
        session.execute(ControlAction::ResetScore { team: None });
        session.execute(ControlAction::ResetTeamFouls { team: None });

        assert!(session.history.is_empty());
    }

    #[test]
    fn clock_ticks_do_not_push_history() {
        let mut session = Session::new();
        session.execute(ControlAction::ToggleClock);
        for _ in 0..60 {
            session.execute(SystemAction::ClockTick);
        }

        assert_eq!(session.state.clock.time_left, 18 * 60 - 60);
        assert!(session.history.is_empty());
    }

    #[test]
    fn undo_depth_is_bounded_at_capacity() {
        let mut session = Session::new();
        for _ in 0..60 {
            session.execute(ControlAction::AddScore {
                team: Team::Home,
                points: 1,
            });
        }
        assert_eq!(session.history.len(), 50);

        for _ in 0..60 {
            session.execute(ControlAction::Undo);
        }

        // 60 scoring pushes, 50 retained: undoing all the way lands on
        // the state as of push #11, i.e. ten points already on the board.
        assert_eq!(session.state.home.score, 10);
    }

    #[test]
    fn undo_after_each_operation_walks_back_in_order() {
        let mut session = Session::new();
        session.execute(ControlAction::AddScore {
            team: Team::Home,
            points: 2,
        });
        session.execute(ControlAction::AddTeamFoul { team: Team::Guest });
        session.execute(ControlAction::TogglePossession);

        session.execute(ControlAction::Undo);
        assert_eq!(session.state.possession, Team::Home);
        assert_eq!(session.state.guest.fouls, 1);

        session.execute(ControlAction::Undo);
        assert_eq!(session.state.guest.fouls, 0);
        assert_eq!(session.state.home.score, 2);

        session.execute(ControlAction::Undo);
        assert_eq!(session.state.home.score, 0);
    }

    #[test]
    fn expiry_is_reported_exactly_once() {
        let mut session = Session::new();
        session.state.clock.time_left = 2;
        session.execute(ControlAction::ToggleClock);

        assert!(!session.execute(SystemAction::ClockTick).clock_expired);
        let expiry = session.execute(SystemAction::ClockTick);
        assert!(expiry.clock_expired);
        assert!(!session.state.clock.is_running);
        assert_eq!(session.state.clock.time_left, 0);

        // Further ticks are no-ops and report nothing.
        let after = session.execute(SystemAction::ClockTick);
        assert!(!after.changed);
        assert!(!after.clock_expired);
    }

    #[test]
    fn undo_restores_roster_mutations() {
        let mut session = Session::new();
        session.execute(ControlAction::AddPlayer {
            team: Team::Home,
            jersey: "23".into(),
        });
        let id = session.state.home.players[0].id;
        let with_player = session.state.clone();

        session.execute(ControlAction::RemovePlayer {
            team: Team::Home,
            player: id,
        });
        assert!(session.state.home.players.is_empty());

        session.execute(ControlAction::Undo);
        assert_eq!(session.state, with_player);
    }
}
