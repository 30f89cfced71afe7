//! Roster panels: jersey numbers, per-player fouls, selection highlight.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use courtside_core::{GameState, Team, TeamState};

use crate::state::AppState;

/// Players at or past this many fouls are highlighted. Display only;
/// nothing forces a removal.
const FOUL_OUT_THRESHOLD: u32 = 5;

/// Render both rosters side by side.
pub fn render(frame: &mut Frame, area: Rect, state: &GameState, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_roster(frame, chunks[0], &state.home, Team::Home, app);
    render_roster(frame, chunks[1], &state.guest, Team::Guest, app);
}

fn render_roster(frame: &mut Frame, area: Rect, team: &TeamState, side: Team, app: &AppState) {
    let selected_row = (app.selected_side == side).then_some(app.selected_row);

    let items: Vec<ListItem> = team
        .players
        .iter()
        .enumerate()
        .map(|(row, player)| {
            let fouled_out = player.fouls >= FOUL_OUT_THRESHOLD;
            let mut style = if fouled_out {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if selected_row == Some(row) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let marker = if fouled_out { " OUT" } else { "" };
            ListItem::new(Line::from(Span::styled(
                format!("#{:<4} fouls: {}{}", player.jersey, player.fouls, marker),
                style,
            )))
        })
        .collect();

    let title = format!(" {} ({}) ", team.name, team.players.len());
    let border_style = if app.selected_side == side {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    frame.render_widget(list, area);
}
