//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-action mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};

use courtside_core::{ControlAction, GameState, Team};

use crate::state::{AppMode, AppState, EntryKind};

/// Jersey entry accepts at most this many characters.
const MAX_JERSEY_LEN: usize = 3;
/// Team name entry accepts at most this many characters.
const MAX_NAME_LEN: usize = 20;

/// High-level outcome of processing a keyboard event.
#[derive(Debug)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Submit the decoded scoreboard action to the runtime.
    Submit(ControlAction),
    /// No action produced; the key may still have moved UI state.
    None,
}

/// Translates `KeyEvent`s into scoreboard actions.
///
/// Key handling consults (and mutates) the [`AppState`] for modal entry
/// and roster selection, and reads the latest game snapshot to resolve
/// the selected player.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, app: &mut AppState, state: &GameState) -> KeyAction {
        match &app.mode {
            AppMode::Normal => self.handle_normal(key, app, state),
            AppMode::TextEntry { .. } => self.handle_text_entry(key, app),
        }
    }

    fn handle_normal(&self, key: KeyEvent, app: &mut AppState, state: &GameState) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch, app, state),
            KeyCode::Tab => {
                app.selected_side = app.selected_side.opponent();
                app.clamp_selection(state);
                KeyAction::None
            }
            KeyCode::Up => {
                app.selected_row = app.selected_row.saturating_sub(1);
                KeyAction::None
            }
            KeyCode::Down => {
                app.selected_row += 1;
                app.clamp_selection(state);
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, ch: char, app: &mut AppState, state: &GameState) -> KeyAction {
        match ch {
            'q' => KeyAction::Quit,

            ' ' => KeyAction::Submit(ControlAction::ToggleClock),
            'r' => KeyAction::Submit(ControlAction::ResetClock),
            'p' => KeyAction::Submit(ControlAction::TogglePossession),
            'n' => KeyAction::Submit(ControlAction::NextPeriod),
            'u' => KeyAction::Submit(ControlAction::Undo),

            '1' | '2' | '3' => self.score(Team::Home, ch),
            '7' | '8' | '9' => self.score(Team::Guest, ch),

            'f' => KeyAction::Submit(ControlAction::AddTeamFoul { team: Team::Home }),
            'g' => KeyAction::Submit(ControlAction::AddTeamFoul { team: Team::Guest }),

            'F' => KeyAction::Submit(ControlAction::ResetTeamFouls { team: None }),
            'S' => KeyAction::Submit(ControlAction::ResetScore { team: None }),
            'G' => KeyAction::Submit(ControlAction::ResetGame),

            'x' => match app.selected_player(state) {
                Some(player) => KeyAction::Submit(ControlAction::AddPlayerFoul {
                    team: app.selected_side,
                    player,
                }),
                None => KeyAction::None,
            },
            'd' => match app.selected_player(state) {
                Some(player) => KeyAction::Submit(ControlAction::RemovePlayer {
                    team: app.selected_side,
                    player,
                }),
                None => KeyAction::None,
            },

            'a' => self.enter_text_mode(app, EntryKind::AddPlayer, Team::Home),
            'A' => self.enter_text_mode(app, EntryKind::AddPlayer, Team::Guest),
            'e' => self.enter_text_mode(app, EntryKind::TeamName, Team::Home),
            'E' => self.enter_text_mode(app, EntryKind::TeamName, Team::Guest),

            _ => KeyAction::None,
        }
    }

    fn score(&self, team: Team, digit: char) -> KeyAction {
        let points = match digit {
            '1' | '7' => 1,
            '2' | '8' => 2,
            _ => 3,
        };
        KeyAction::Submit(ControlAction::AddScore { team, points })
    }

    fn enter_text_mode(&self, app: &mut AppState, kind: EntryKind, team: Team) -> KeyAction {
        app.mode = AppMode::TextEntry {
            kind,
            team,
            buffer: String::new(),
        };
        KeyAction::None
    }

    fn handle_text_entry(&self, key: KeyEvent, app: &mut AppState) -> KeyAction {
        let AppMode::TextEntry { kind, team, buffer } = &mut app.mode else {
            return KeyAction::None;
        };
        let (kind, team) = (*kind, *team);

        match key.code {
            KeyCode::Esc => {
                app.mode = AppMode::Normal;
                KeyAction::None
            }
            KeyCode::Backspace => {
                buffer.pop();
                KeyAction::None
            }
            KeyCode::Char(ch) => {
                match kind {
                    // Jersey numbers are validated here, at the UI edge:
                    // digits only, up to three characters.
                    EntryKind::AddPlayer => {
                        if ch.is_ascii_digit() && buffer.len() < MAX_JERSEY_LEN {
                            buffer.push(ch);
                        }
                    }
                    EntryKind::TeamName => {
                        if buffer.len() < MAX_NAME_LEN {
                            buffer.push(ch);
                        }
                    }
                }
                KeyAction::None
            }
            KeyCode::Enter => {
                let text = buffer.clone();
                app.mode = AppMode::Normal;
                if text.is_empty() {
                    return KeyAction::None;
                }
                match kind {
                    EntryKind::AddPlayer => KeyAction::Submit(ControlAction::AddPlayer {
                        team,
                        jersey: text,
                    }),
                    EntryKind::TeamName => {
                        KeyAction::Submit(ControlAction::SetTeamName { team, name: text })
                    }
                }
            }
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
