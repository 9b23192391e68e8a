//! Shared UI building blocks: framed layout, status bar, info panel, overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play surface - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

const INFO_PANEL_WIDTH: u16 = 22;
const STATUS_BAR_HEIGHT: u16 = 2;

/// Split `area` into play surface, status bar and info panel under a titled
/// border.
///
/// ```text
/// ┌─ Skyhop ────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [play surface]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(frame: &mut Frame, area: Rect, title: &str) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, info_panel] = split2(
        inner,
        Direction::Horizontal,
        [Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)],
    );
    let [content, status_bar] = split2(
        left,
        Direction::Vertical,
        [Constraint::Min(4), Constraint::Length(STATUS_BAR_HEIGHT)],
    );

    GameLayout {
        content,
        status_bar,
        info_panel,
    }
}

fn split2(area: Rect, direction: Direction, constraints: [Constraint; 2]) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    [chunks[0], chunks[1]]
}

/// Render a 2-line status bar: status message, then controls.
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Space]", "Jump")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render an info panel frame with standard " Info " title and DarkGray border.
///
/// Returns the inner Rect for content rendering.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Render a centered message box over `area` without clearing the rest, so
/// the play surface stays visible around it.
pub fn render_message_overlay(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let message_len = message.chars().count() as u16;
    let box_width = message_len.saturating_add(4).min(area.width);
    let text_width = box_width.saturating_sub(4).max(1);
    let text_lines = message_len.div_ceil(text_width).max(1);
    let box_height = (text_lines + 2).min(area.height);
    if box_width < 3 || box_height < 3 {
        return;
    }
    let x = area.x + (area.width - box_width) / 2;
    let y = area.y + (area.height - box_height) / 2;
    let box_area = Rect::new(x, y, box_width, box_height);

    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let text = Paragraph::new(Span::styled(
        message,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(text, inner);
}
