use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::game::EndReason;
use crate::ui::hud::HudInfo;

/// Draws the pre-game screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, info: &HudInfo<'_>) {
    let mut body = Vec::new();
    if let Some(online) = info.online_users {
        body.push(format!("Online users: {online}"));
    }
    body.push(format!("High score: {}", info.high_score));
    body.push(format!("Games played: {}", info.games_played));
    body.push(String::new());
    body.push("[Enter]/[Space] Start".to_owned());
    body.push("[Q]/[Esc] Quit".to_owned());
    body.push(String::new());
    body.push("Arrows/WASD steer, mouse drags swipe".to_owned());

    render_popup(frame, area, "VIPERA", &body, info);
}

/// Draws the post-game screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    reason: Option<EndReason>,
    new_high: bool,
    info: &HudInfo<'_>,
) {
    let title = match reason {
        Some(EndReason::BoardFull) => "BOARD CLEARED",
        _ => "GAME OVER",
    };

    let mut body = vec![format!("Score: {score}"), format!("High score: {}", info.high_score)];
    match reason {
        Some(EndReason::Offscreen) => body.push("Cause: ran off the field".to_owned()),
        Some(EndReason::SelfCollision) => body.push("Cause: bit yourself".to_owned()),
        Some(EndReason::BoardFull) | None => {}
    }
    if new_high {
        body.push("New high score!".to_owned());
    }
    if let Some(online) = info.online_users {
        body.push(format!("Online users: {online}"));
    }
    body.push(String::new());
    body.push("[Enter]/[Space] Play again".to_owned());
    body.push("[Q]/[Esc] Quit".to_owned());

    render_popup(frame, area, title, &body, info);
}

/// Renders a centered bordered popup sized to its widest line.
fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, body: &[String], info: &HudInfo<'_>) {
    let widest = body
        .iter()
        .map(|line| line.as_str().width())
        .max()
        .unwrap_or(0)
        .max(title.width());
    let width = u16::try_from(widest).unwrap_or(u16::MAX).saturating_add(4);
    let height = u16::try_from(body.len()).unwrap_or(u16::MAX).saturating_add(4);
    let popup = centered(area, width, height);

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::styled(
        title,
        Style::new()
            .fg(info.theme.menu_title)
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::raw(""));
    for text in body {
        lines.push(Line::raw(text.as_str()));
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(info.theme.hud_value).bg(info.theme.play_bg))
            .block(Block::bordered().border_style(Style::new().fg(info.theme.border_fg))),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
