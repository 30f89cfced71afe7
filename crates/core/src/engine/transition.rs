//! Per-action state transitions.
//!
//! Each function mutates the state in place. Transitions never fail:
//! unknown player ids and out-of-range requests leave the state untouched,
//! and the engine detects no-ops by comparing against the pre-image.

use crate::action::{Action, ControlAction, SystemAction};
use crate::config::GameConfig;
use crate::state::{ClockState, GameState, Player, PlayerId, Team};

pub(super) fn apply(action: &Action, state: &mut GameState, config: &GameConfig) {
    match action {
        Action::System(SystemAction::ClockTick) => clock_tick(state),
        Action::Control(control) => match control {
            ControlAction::ToggleClock => toggle_clock(state),
            ControlAction::ResetClock => reset_clock(state, config),
            ControlAction::AddScore { team, points } => add_score(state, *team, *points),
            ControlAction::AddTeamFoul { team } => add_team_foul(state, *team),
            ControlAction::ResetTeamFouls { team } => reset_team_fouls(state, *team),
            ControlAction::TogglePossession => toggle_possession(state),
            ControlAction::AddPlayer { team, jersey } => add_player(state, *team, jersey),
            ControlAction::RemovePlayer { team, player } => remove_player(state, *team, *player),
            ControlAction::AddPlayerFoul { team, player } => {
                add_player_foul(state, *team, *player)
            }
            ControlAction::NextPeriod => next_period(state, config),
            ControlAction::ResetScore { team } => reset_score(state, *team),
            ControlAction::ResetGame => reset_game(state, config),
            ControlAction::SetTeamName { team, name } => set_team_name(state, *team, name),
            // Consumes history instead of producing a transition; the
            // engine intercepts it before reaching this point.
            ControlAction::Undo => {}
        },
    }
}

fn toggle_clock(state: &mut GameState) {
    // Starting an expired clock is refused so `time_left == 0` always
    // implies a stopped clock.
    if !state.clock.is_running && state.clock.is_expired() {
        return;
    }
    state.clock.is_running = !state.clock.is_running;
}

fn reset_clock(state: &mut GameState, config: &GameConfig) {
    state.clock = ClockState::stopped(config.period_seconds);
}

fn clock_tick(state: &mut GameState) {
    if !state.clock.is_running || state.clock.is_expired() {
        return;
    }
    state.clock.time_left -= 1;
    if state.clock.is_expired() {
        state.clock.is_running = false;
    }
}

fn add_score(state: &mut GameState, team: Team, points: i32) {
    let side = state.team_mut(team);
    side.score = side.score.saturating_add_signed(points);
}

fn add_team_foul(state: &mut GameState, team: Team) {
    state.team_mut(team).fouls += 1;
}

fn reset_team_fouls(state: &mut GameState, team: Option<Team>) {
    match team {
        Some(team) => state.team_mut(team).fouls = 0,
        None => {
            state.home.fouls = 0;
            state.guest.fouls = 0;
        }
    }
}

fn toggle_possession(state: &mut GameState) {
    state.possession = state.possession.opponent();
}

fn add_player(state: &mut GameState, team: Team, jersey: &str) {
    let id = state.allocate_player_id();
    let side = state.team_mut(team);
    side.players.push(Player::new(id, jersey));
    side.sort_players();
}

fn remove_player(state: &mut GameState, team: Team, player: PlayerId) {
    state.team_mut(team).players.retain(|p| p.id != player);
}

fn add_player_foul(state: &mut GameState, team: Team, player: PlayerId) {
    let side = state.team_mut(team);
    let Some(entry) = side.player_mut(player) else {
        // Unknown id: neither the player nor the team count moves.
        return;
    };
    entry.fouls += 1;
    side.fouls += 1;
}

fn next_period(state: &mut GameState, config: &GameConfig) {
    if state.period >= GameConfig::MAX_PERIOD {
        return;
    }
    state.period += 1;
    state.clock = ClockState::stopped(config.period_seconds);
    state.home.fouls = 0;
    state.guest.fouls = 0;
}

fn reset_score(state: &mut GameState, team: Option<Team>) {
    match team {
        Some(team) => state.team_mut(team).score = 0,
        None => {
            state.home.score = 0;
            state.guest.score = 0;
        }
    }
}

fn reset_game(state: &mut GameState, config: &GameConfig) {
    state.clock = ClockState::stopped(config.period_seconds);
    state.period = 1;
    state.possession = Team::Home;
    for side in [&mut state.home, &mut state.guest] {
        side.score = 0;
        side.fouls = 0;
        for player in &mut side.players {
            player.fouls = 0;
        }
    }
    // Team names are deliberately left as-is.
}

fn set_team_name(state: &mut GameState, team: Team, name: &str) {
    state.team_mut(team).name = name.to_owned();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PlayerId;

    fn fresh() -> (GameState, GameConfig) {
        let config = GameConfig::default();
        (GameState::new(&config), config)
    }

    fn run(state: &mut GameState, config: &GameConfig, action: ControlAction) {
        apply(&Action::Control(action), state, config);
    }

    #[test]
    fn toggle_clock_flips_running() {
        let (mut state, config) = fresh();
        run(&mut state, &config, ControlAction::ToggleClock);
        assert!(state.clock.is_running);
        run(&mut state, &config, ControlAction::ToggleClock);
        assert!(!state.clock.is_running);
    }

    #[test]
    fn expired_clock_refuses_to_start() {
        let (mut state, config) = fresh();
        state.clock.time_left = 0;
        run(&mut state, &config, ControlAction::ToggleClock);
        assert!(!state.clock.is_running);
    }

    #[test]
    fn reset_clock_stops_and_refills() {
        let (mut state, config) = fresh();
        state.clock = ClockState {
            time_left: 42,
            is_running: true,
        };
        run(&mut state, &config, ControlAction::ResetClock);
        assert_eq!(state.clock, ClockState::stopped(config.period_seconds));
    }

    #[test]
    fn tick_decrements_only_while_running() {
        let (mut state, config) = fresh();
        apply(&Action::System(SystemAction::ClockTick), &mut state, &config);
        assert_eq!(state.clock.time_left, config.period_seconds);

        state.clock.is_running = true;
        apply(&Action::System(SystemAction::ClockTick), &mut state, &config);
        assert_eq!(state.clock.time_left, config.period_seconds - 1);
    }

    #[test]
    fn tick_stops_clock_at_zero() {
        let (mut state, config) = fresh();
        state.clock = ClockState {
            time_left: 1,
            is_running: true,
        };
        apply(&Action::System(SystemAction::ClockTick), &mut state, &config);
        assert_eq!(state.clock.time_left, 0);
        assert!(!state.clock.is_running);
    }

    #[test]
    fn add_score_clamps_at_zero() {
        let (mut state, config) = fresh();
        run(
            &mut state,
            &config,
            ControlAction::AddScore {
                team: Team::Home,
                points: 2,
            },
        );
        run(
            &mut state,
            &config,
            ControlAction::AddScore {
                team: Team::Home,
                points: -5,
            },
        );
        assert_eq!(state.home.score, 0);
    }

    #[test]
    fn reset_variants_target_one_or_both_sides() {
        let (mut state, config) = fresh();
        state.home.score = 10;
        state.guest.score = 8;
        state.home.fouls = 3;
        state.guest.fouls = 4;

        run(
            &mut state,
            &config,
            ControlAction::ResetScore {
                team: Some(Team::Home),
            },
        );
        assert_eq!((state.home.score, state.guest.score), (0, 8));

        run(&mut state, &config, ControlAction::ResetScore { team: None });
        assert_eq!((state.home.score, state.guest.score), (0, 0));

        run(
            &mut state,
            &config,
            ControlAction::ResetTeamFouls {
                team: Some(Team::Guest),
            },
        );
        assert_eq!((state.home.fouls, state.guest.fouls), (3, 0));

        run(
            &mut state,
            &config,
            ControlAction::ResetTeamFouls { team: None },
        );
        assert_eq!((state.home.fouls, state.guest.fouls), (0, 0));
    }

    #[test]
    fn added_players_keep_jersey_order() {
        let (mut state, config) = fresh();
        run(
            &mut state,
            &config,
            ControlAction::AddPlayer {
                team: Team::Home,
                jersey: "23".into(),
            },
        );
        run(
            &mut state,
            &config,
            ControlAction::AddPlayer {
                team: Team::Home,
                jersey: "7".into(),
            },
        );

        let order: Vec<&str> = state.home.players.iter().map(|p| p.jersey.as_str()).collect();
        assert_eq!(order, ["7", "23"]);
    }

    #[test]
    fn player_foul_moves_both_counts_together() {
        let (mut state, config) = fresh();
        run(
            &mut state,
            &config,
            ControlAction::AddPlayer {
                team: Team::Home,
                jersey: "11".into(),
            },
        );
        let id = state.home.players[0].id;

        run(
            &mut state,
            &config,
            ControlAction::AddPlayerFoul {
                team: Team::Home,
                player: id,
            },
        );
        assert_eq!(state.home.players[0].fouls, 1);
        assert_eq!(state.home.fouls, 1);
    }

    #[test]
    fn player_foul_on_unknown_id_moves_nothing() {
        let (mut state, config) = fresh();
        let before = state.clone();
        run(
            &mut state,
            &config,
            ControlAction::AddPlayerFoul {
                team: Team::Home,
                player: PlayerId(404),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn remove_unknown_player_leaves_roster_unchanged() {
        let (mut state, config) = fresh();
        run(
            &mut state,
            &config,
            ControlAction::AddPlayer {
                team: Team::Guest,
                jersey: "5".into(),
            },
        );
        let before = state.clone();

        run(
            &mut state,
            &config,
            ControlAction::RemovePlayer {
                team: Team::Guest,
                player: PlayerId(404),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn next_period_advances_once_then_caps() {
        let (mut state, config) = fresh();
        state.clock = ClockState {
            time_left: 17,
            is_running: true,
        };
        state.home.fouls = 4;
        state.guest.fouls = 2;

        run(&mut state, &config, ControlAction::NextPeriod);
        assert_eq!(state.period, 2);
        assert_eq!(state.clock, ClockState::stopped(config.period_seconds));
        assert_eq!((state.home.fouls, state.guest.fouls), (0, 0));

        let before = state.clone();
        run(&mut state, &config, ControlAction::NextPeriod);
        assert_eq!(state, before);
    }

    #[test]
    fn reset_game_keeps_rosters_and_names() {
        let (mut state, config) = fresh();
        run(
            &mut state,
            &config,
            ControlAction::SetTeamName {
                team: Team::Home,
                name: "Hawks".into(),
            },
        );
        run(
            &mut state,
            &config,
            ControlAction::AddPlayer {
                team: Team::Home,
                jersey: "23".into(),
            },
        );
        let id = state.home.players[0].id;
        run(
            &mut state,
            &config,
            ControlAction::AddPlayerFoul {
                team: Team::Home,
                player: id,
            },
        );
        run(
            &mut state,
            &config,
            ControlAction::AddScore {
                team: Team::Guest,
                points: 3,
            },
        );
        run(&mut state, &config, ControlAction::TogglePossession);
        run(&mut state, &config, ControlAction::NextPeriod);

        run(&mut state, &config, ControlAction::ResetGame);

        assert_eq!(state.home.name, "Hawks");
        assert_eq!(state.home.players.len(), 1);
        assert_eq!(state.home.players[0].id, id);
        assert_eq!(state.home.players[0].jersey, "23");
        assert_eq!(state.home.players[0].fouls, 0);
        assert_eq!(state.guest.score, 0);
        assert_eq!(state.home.fouls, 0);
        assert_eq!(state.period, 1);
        assert_eq!(state.possession, Team::Home);
        assert_eq!(state.clock, ClockState::stopped(config.period_seconds));
    }

    #[test]
    fn time_left_stays_in_bounds_under_arbitrary_sequences() {
        let (mut state, config) = fresh();
        let actions = [
            Action::Control(ControlAction::ToggleClock),
            Action::System(SystemAction::ClockTick),
            Action::System(SystemAction::ClockTick),
            Action::Control(ControlAction::ResetClock),
            Action::Control(ControlAction::ToggleClock),
            Action::System(SystemAction::ClockTick),
            Action::Control(ControlAction::NextPeriod),
            Action::System(SystemAction::ClockTick),
        ];

        for action in &actions {
            apply(action, &mut state, &config);
            assert!(state.clock.time_left <= config.period_seconds);
            if state.clock.is_expired() {
                assert!(!state.clock.is_running);
            }
        }
    }
}
