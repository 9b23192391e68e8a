//! Terminal size check.
//!
//! The play surface is a fixed world scaled to whatever the terminal offers;
//! below a minimum size the pipes and the gap stop being readable, so a
//! notice is drawn instead.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

pub const MIN_COLS: u16 = 70;
pub const MIN_ROWS: u16 = 16;

/// Terminal dimensions, computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub cols: u16,
    pub rows: u16,
}

impl LayoutContext {
    pub fn from_frame(frame: &Frame) -> Self {
        let size = frame.size();
        Self::from_size(size.width, size.height)
    }

    /// Create from explicit dimensions (for testing).
    pub fn from_size(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn is_too_small(&self) -> bool {
        self.cols < MIN_COLS || self.rows < MIN_ROWS
    }
}

/// Render a "terminal too small" message.
pub fn render_too_small(frame: &mut Frame, ctx: &LayoutContext) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                MIN_COLS, MIN_ROWS, ctx.cols, ctx.rows
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}
