//! Immutable per-frame view of the game for the render step.
//!
//! The renderer only ever sees a [`Snapshot`]; it never reaches back into the
//! simulation.

use super::session::Phase;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    /// Fixed left edge.
    pub x: f64,
    /// Height above the floor.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub velocity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub x: f64,
    pub width: f64,
    pub bottom_height: f64,
    pub top_height: f64,
    pub passed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    /// Overlay text (start prompt or game over), `None` while running.
    pub message: Option<String>,
    pub container: ContainerSize,
}

impl Snapshot {
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Overlay text shown after a collision.
pub fn game_over_message(score: u32) -> String {
    format!("Game Over! Score: {}. Press SPACE to restart.", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_message() {
        assert_eq!(
            game_over_message(7),
            "Game Over! Score: 7. Press SPACE to restart."
        );
    }
}
