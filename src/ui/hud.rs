use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameSession;

/// Values the renderer shows alongside live session state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    pub games_played: u32,
    /// Connection count delivered by the hosting environment, if any has
    /// arrived. Shown on the menu screens only, never during play.
    pub online_users: Option<u32>,
    pub theme: &'a Theme,
}

/// Renders the one-line status bar and returns the play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    session: &GameSession,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let value_style = Style::new().fg(info.theme.hud_value);
    let sep = Span::raw(" │ ");
    let line = Line::from(vec![
        Span::raw("Score: "),
        Span::styled(session.score().to_string(), value_style),
        sep,
        Span::raw("Hi: "),
        Span::styled(info.high_score.to_string(), value_style),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Right)
            .style(Style::new().fg(info.theme.hud_text)),
        status_area,
    );

    play_area
}
