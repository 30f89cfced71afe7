//! Client-side UI state.
//!
//! The game state itself lives in the runtime; this is only the modal
//! and selection bookkeeping the terminal needs between frames.

use courtside_core::{GameState, PlayerId, Team};

/// Which text-entry prompt is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    AddPlayer,
    TeamName,
}

/// Modal state of the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Collecting text for an add-player or team-name prompt.
    TextEntry {
        kind: EntryKind,
        team: Team,
        buffer: String,
    },
}

/// Per-frame UI bookkeeping: mode plus roster selection.
pub struct AppState {
    pub mode: AppMode,
    pub selected_side: Team,
    pub selected_row: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Normal,
            selected_side: Team::Home,
            selected_row: 0,
        }
    }

    /// Clamps the roster selection after a state refresh shrinks a roster.
    pub fn clamp_selection(&mut self, state: &GameState) {
        let len = state.team(self.selected_side).players.len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }

    /// The currently selected player, if the roster has one.
    pub fn selected_player(&self, state: &GameState) -> Option<PlayerId> {
        state
            .team(self.selected_side)
            .players
            .get(self.selected_row)
            .map(|p| p.id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
