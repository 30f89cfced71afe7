//! Key help footer, doubling as the text-entry prompt.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState, EntryKind};

pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let text = match &app.mode {
        AppMode::Normal => vec![
            Line::from(
                "1/2/3 home pts | 7/8/9 guest pts | f/g team foul | p possession | n period | u undo",
            ),
            Line::from(
                "space clock | r reset clock | a/A add player | x player foul | d cut | e/E name | S/F/G resets | q quit",
            ),
        ],
        AppMode::TextEntry { kind, team, buffer } => {
            let label = match kind {
                EntryKind::AddPlayer => format!("New {team} player jersey"),
                EntryKind::TeamName => format!("{team} team name"),
            };
            vec![Line::from(vec![
                Span::raw(format!("{label}: ")),
                Span::styled(
                    format!("{buffer}_"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "  (Enter to confirm, Esc to cancel)",
                    Style::default().fg(Color::DarkGray),
                ),
            ])]
        }
    };

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Keys "));
    frame.render_widget(paragraph, area);
}
