pub mod game_common;
pub mod play_scene;
pub mod responsive;

use crate::core::Snapshot;
use ratatui::Frame;
use responsive::{render_too_small, LayoutContext};

/// Draw one frame from a snapshot.
pub fn draw_ui(frame: &mut Frame, snapshot: &Snapshot) {
    let ctx = LayoutContext::from_frame(frame);
    if ctx.is_too_small() {
        render_too_small(frame, &ctx);
        return;
    }
    play_scene::render_game(frame, frame.size(), snapshot);
}
