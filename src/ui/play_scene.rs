//! Draws a [`Snapshot`] onto the terminal.
//!
//! The world (container units, y up from the floor) is scaled onto the
//! available cells every frame. Nothing here mutates the game; obstacles that
//! left the snapshot simply stop being drawn.

use crate::core::session::Phase;
use crate::core::snapshot::{PlayerView, Snapshot};
use crate::ui::game_common::{
    create_game_layout, render_info_panel_frame, render_message_overlay, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Contents of one terminal cell of the play surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Pipe,
    Player,
}

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let layout = create_game_layout(frame, area, " Skyhop ");

    render_play_area(frame, layout.content, snapshot);
    render_status_bar_content(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot);

    if let Some(message) = &snapshot.message {
        let color = match snapshot.phase {
            Phase::Over => Color::Red,
            _ => Color::Yellow,
        };
        render_message_overlay(frame, layout.content, message, color);
    }
}

/// Rasterise the snapshot into `cols` x `rows` cells, row 0 at the top.
pub fn rasterize(snapshot: &Snapshot, cols: u16, rows: u16) -> Vec<Vec<Cell>> {
    let cols = cols as usize;
    let rows = rows as usize;
    let mut grid = vec![vec![Cell::Empty; cols]; rows];
    if cols == 0 || rows == 0 {
        return grid;
    }

    let x_scale = snapshot.container.width / cols as f64;
    let y_scale = snapshot.container.height / rows as f64;

    for (row, line) in grid.iter_mut().enumerate() {
        // Sample each cell at its center
        let from_top = (row as f64 + 0.5) * y_scale;
        let from_floor = snapshot.container.height - from_top;

        for (col, cell) in line.iter_mut().enumerate() {
            let x = (col as f64 + 0.5) * x_scale;
            let in_pipe = snapshot.obstacles.iter().any(|o| {
                x >= o.x
                    && x < o.x + o.width
                    && (from_floor < o.bottom_height || from_top < o.top_height)
            });
            if in_pipe {
                *cell = Cell::Pipe;
            }
        }
    }

    // The player is drawn from its bounds so it never vanishes between samples
    let (col_range, row_range) = player_cells(&snapshot.player, snapshot, cols, rows);
    for row in row_range {
        for col in col_range.clone() {
            grid[row][col] = Cell::Player;
        }
    }

    grid
}

fn player_cells(
    player: &PlayerView,
    snapshot: &Snapshot,
    cols: usize,
    rows: usize,
) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
    let x_scale = snapshot.container.width / cols as f64;
    let y_scale = snapshot.container.height / rows as f64;

    let first_col = ((player.x / x_scale).floor().max(0.0) as usize).min(cols - 1);
    let last_col = (((player.x + player.width) / x_scale).ceil() as usize).clamp(first_col + 1, cols);

    let top = snapshot.container.height - (player.y + player.height);
    let bottom = snapshot.container.height - player.y;
    let first_row = ((top / y_scale).floor().max(0.0) as usize).min(rows - 1);
    let last_row = ((bottom / y_scale).ceil().max(0.0) as usize).clamp(first_row + 1, rows);

    (first_col..last_col, first_row..last_row)
}

fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let player_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let player_char = if snapshot.player.velocity > 0.0 {
        "▲" // rising
    } else if snapshot.player.velocity < 0.0 {
        "▼"
    } else {
        "■"
    };

    let lines: Vec<Line> = rasterize(snapshot, area.width, area.height)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    Cell::Empty => Span::raw(" "),
                    Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                    Cell::Player => Span::styled(player_char, player_style),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let controls = [("[Space]", "Jump"), ("[Esc/q]", "Quit")];
    match snapshot.phase {
        Phase::Idle => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &controls,
        ),
        Phase::Running => render_status_bar(
            frame,
            area,
            &snapshot.score_label(),
            Color::Green,
            &controls,
        ),
        Phase::Over => render_status_bar(
            frame,
            area,
            &format!("Final {}", snapshot.score_label()),
            Color::Red,
            &[("[Space]", "Restart"), ("[Esc/q]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (phase_label, phase_color) = match snapshot.phase {
        Phase::Idle => ("Ready", Color::Yellow),
        Phase::Running => ("Flying", Color::Green),
        Phase::Over => ("Crashed", Color::Red),
    };
    let label = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", phase_label),
            Style::default()
                .fg(phase_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(
                snapshot.obstacles.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Height: ", label),
            Span::styled(
                format!("{:.0}", snapshot.player.y),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::GameController;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn running_snapshot() -> Snapshot {
        let mut game = GameController::new(GameConfig::default());
        game.start();
        game.snapshot()
    }

    #[test]
    fn test_rasterize_grounded_player_bottom_left() {
        let snap = running_snapshot();
        // 60 x 20 cells -> 10 units per col, 20 units per row
        let grid = rasterize(&snap, 60, 20);
        assert_eq!(grid[19][5], Cell::Player);
        assert_eq!(grid[19][7], Cell::Player);
        assert_eq!(grid[19][8], Cell::Empty);
        assert_eq!(grid[0][5], Cell::Empty);
    }

    #[test]
    fn test_rasterize_pipe_pair_leaves_gap() {
        let mut snap = running_snapshot();
        snap.obstacles.push(crate::core::snapshot::ObstacleView {
            x: 300.0,
            width: 30.0,
            bottom_height: 100.0,
            top_height: 200.0,
            passed: false,
        });
        let grid = rasterize(&snap, 60, 20);
        // Bottom pipe fills rows whose center is below 100 above the floor
        assert_eq!(grid[19][31], Cell::Pipe);
        assert_eq!(grid[15][31], Cell::Pipe);
        // Gap between 100 and 200 above the floor
        assert_eq!(grid[12][31], Cell::Empty);
        // Top pipe covers the upper 200 units
        assert_eq!(grid[0][31], Cell::Pipe);
        assert_eq!(grid[9][31], Cell::Pipe);
        // Outside the pipe columns
        assert_eq!(grid[19][40], Cell::Empty);
    }

    #[test]
    fn test_rasterize_handles_zero_size() {
        let snap = running_snapshot();
        assert!(rasterize(&snap, 0, 0).is_empty());
    }

    #[test]
    fn test_render_idle_shows_start_message() {
        let game = GameController::new(GameConfig::default());
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_game(f, f.size(), &game.snapshot()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Skyhop"));
        assert!(text.contains("Press SPACE to Start and Jump!"));
    }

    #[test]
    fn test_render_running_shows_score() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_game(f, f.size(), &running_snapshot()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 0"));
        assert!(!text.contains("Game Over"));
    }
}
