use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GridSize, GLYPH_APPLE, GLYPH_SNAKE_SEGMENT};
use crate::game::GameSession;
use crate::snake::Position;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Which top-level view the frame loop is showing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Start,
    Playing,
    GameOver { new_high: bool },
}

/// Renders one full frame from immutable session state.
pub fn render(frame: &mut Frame<'_>, session: &GameSession, screen: Screen, info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, session, info);

    let theme = info.theme;
    let block = Block::bordered()
        .style(Style::new().bg(theme.play_bg))
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    // Snake first, apple above it, so the apple stays visible.
    render_snake(frame, inner, session);
    render_apple(frame, inner, session);

    match screen {
        Screen::Start => render_start_menu(frame, play_area, info),
        Screen::GameOver { new_high } => {
            render_game_over_menu(frame, play_area, session.score(), session.end_reason, new_high, info);
        }
        Screen::Playing => {}
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, session: &GameSession) {
    let style = Style::new().fg(session.snake.color());
    let bounds = session.bounds();

    let buffer = frame.buffer_mut();
    for segment in session.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, bounds, *segment) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_SNAKE_SEGMENT, style);
    }
}

fn render_apple(frame: &mut Frame<'_>, inner: Rect, session: &GameSession) {
    let Some((x, y)) = logical_to_terminal(inner, session.bounds(), session.apple.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_APPLE, Style::new().fg(session.apple.color));
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
