//! Axis-aligned bounding-box collision.
//!
//! Bounds use screen orientation inside the container: x grows right, y grows
//! down, so `top < bottom` for any non-empty rectangle. World positions
//! (measured up from the floor) are converted by the helpers below.

use super::obstacles::Obstacle;
use super::physics::PlayerState;
use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Strict overlap on both axes; touching edges do not collide.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        let x_overlap = self.right > other.left && self.left < other.right;
        let y_overlap = self.top < other.bottom && self.bottom > other.top;
        x_overlap && y_overlap
    }
}

/// Player rectangle for the current vertical state.
pub fn player_bounds(player: &PlayerState, config: &GameConfig) -> Bounds {
    let bottom = config.container_height - player.y;
    Bounds::new(
        config.player_x,
        config.player_x + config.player_width,
        bottom - config.player_height,
        bottom,
    )
}

/// Bottom and top pipe rectangles of one obstacle.
///
/// A negative `top_height` gives a top pipe whose bottom lies above its top,
/// which can never overlap anything.
pub fn obstacle_bounds(obstacle: &Obstacle, config: &GameConfig) -> [Bounds; 2] {
    let bottom_pipe = Bounds::new(
        obstacle.x,
        obstacle.right(),
        config.container_height - obstacle.height,
        config.container_height,
    );
    let top_pipe = Bounds::new(obstacle.x, obstacle.right(), 0.0, obstacle.top_height);
    [bottom_pipe, top_pipe]
}

/// True when the player overlaps any of the given rectangles.
pub fn any_collision<'a, I>(player: &Bounds, obstacles: I) -> bool
where
    I: IntoIterator<Item = &'a Bounds>,
{
    obstacles.into_iter().any(|o| player.overlaps(o))
}

/// True when the player overlaps either pipe of any active obstacle.
pub fn player_hits_obstacle(
    player: &PlayerState,
    obstacles: &[Obstacle],
    config: &GameConfig,
) -> bool {
    let p = player_bounds(player, config);
    let elements: Vec<Bounds> = obstacles
        .iter()
        .flat_map(|o| obstacle_bounds(o, config))
        .collect();
    any_collision(&p, &elements)
}
