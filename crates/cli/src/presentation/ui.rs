//! Main render entry point composing the scoreboard widgets.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use courtside_core::GameState;

use crate::presentation::{terminal::Tui, widgets};
use crate::state::AppState;

/// Renders the full frame: scoreboard header, both rosters, key footer.
pub fn render(terminal: &mut Tui, state: &GameState, app: &AppState) -> Result<()> {
    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Scoreboard
                Constraint::Min(0),    // Rosters
                Constraint::Length(4), // Footer / prompt
            ])
            .split(frame.area());

        widgets::scoreboard::render(frame, chunks[0], state);
        widgets::roster::render(frame, chunks[1], state, app);
        widgets::footer::render(frame, chunks[2], app);
    })?;

    Ok(())
}
