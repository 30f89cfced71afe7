//! Scoreboard header: scores, clock, period, possession, team fouls.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use courtside_core::{GameState, Team, TeamState};

/// Render the scoreboard panel: one side per team, the clock in between.
pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    render_side(frame, chunks[0], &state.home, state.possession == Team::Home);
    render_clock(frame, chunks[1], state);
    render_side(frame, chunks[2], &state.guest, state.possession == Team::Guest);
}

fn render_side(frame: &mut Frame, area: Rect, team: &TeamState, has_possession: bool) {
    let possession_marker = if has_possession { " ◄►" } else { "" };

    let text = vec![
        Line::from(Span::styled(
            team.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            team.score.to_string(),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(format!("Fouls: {}", team.fouls)),
            Span::styled(
                possession_marker,
                Style::default().fg(Color::LightYellow),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_clock(frame: &mut Frame, area: Rect, state: &GameState) {
    let clock_style = if state.clock.is_running {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let status = if state.clock.is_running {
        Span::styled("RUNNING", Style::default().fg(Color::LightGreen))
    } else if state.clock.is_expired() {
        Span::styled(
            "EXPIRED",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("STOPPED", Style::default().fg(Color::DarkGray))
    };

    let text = vec![
        Line::from(Span::styled(format_clock(state.clock.time_left), clock_style)),
        Line::from(Span::raw(format!("Period {}", state.period))),
        Line::from(status),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Clock "));
    frame.render_widget(paragraph, area);
}

/// Formats seconds as `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_clock_as_minutes_and_seconds() {
        assert_eq!(format_clock(18 * 60), "18:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(0), "00:00");
    }
}
