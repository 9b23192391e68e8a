//! Obstacle spawning, movement, scoring and pruning.
//!
//! One [`Obstacle`] is a pipe pair: a bottom pipe of `height` standing on the
//! floor and a top pipe of `top_height` hanging from the ceiling, separated by
//! the configured gap.

use crate::config::GameConfig;
use log::{debug, trace};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge in world units (float for smooth scrolling).
    pub x: f64,
    pub width: f64,
    /// Bottom pipe height.
    pub height: f64,
    /// Top pipe height, fixed against the container height at spawn time.
    /// May be negative when the container is shorter than pipe + gap.
    pub top_height: f64,
    /// Whether the player has passed this obstacle (for scoring).
    pub passed: bool,
}

impl Obstacle {
    /// Pipe pair with the given bottom height, placed at `x`.
    pub fn new(x: f64, height: f64, config: &GameConfig) -> Self {
        Self {
            x,
            width: config.obstacle_width,
            height,
            top_height: config.container_height - height - config.gap_height,
            passed: false,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Fully past the left edge of the container.
    pub fn is_off_screen(&self) -> bool {
        self.x < -self.width
    }
}

/// Spawn a new obstacle at the right edge when the spawn interval has elapsed.
///
/// `last_spawn_ms` is `None` until the session's first spawn, which makes the
/// first running frame spawn immediately.
pub fn spawn_if_due<R: Rng>(
    now_ms: u64,
    last_spawn_ms: Option<u64>,
    config: &GameConfig,
    rng: &mut R,
) -> Option<Obstacle> {
    let due = match last_spawn_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) > config.spawn_interval_ms,
    };
    if !due {
        return None;
    }

    let height = if config.obstacle_max_height > config.obstacle_min_height {
        rng.gen_range(config.obstacle_min_height..config.obstacle_max_height)
    } else {
        config.obstacle_min_height
    };
    let obstacle = Obstacle::new(config.container_width, height, config);
    debug!(
        "spawned obstacle height={:.1} top={:.1} at t={}ms",
        obstacle.height, obstacle.top_height, now_ms
    );
    Some(obstacle)
}

/// Move every obstacle left by `speed`. The only movement update per tick.
pub fn advance(obstacles: &mut [Obstacle], speed: f64) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
}

/// Mark obstacles that crossed `player_x` as passed. Returns points earned.
pub fn award_passes(obstacles: &mut [Obstacle], player_x: f64) -> u32 {
    let mut points = 0;
    for obstacle in obstacles.iter_mut() {
        if obstacle.x < player_x && !obstacle.passed {
            obstacle.passed = true;
            points += 1;
        }
    }
    points
}

/// Drop obstacles that left the screen. Returns how many were removed.
pub fn prune(obstacles: &mut Vec<Obstacle>) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_off_screen());
    let removed = before - obstacles.len();
    if removed > 0 {
        trace!("pruned {} obstacle(s), {} active", removed, obstacles.len());
    }
    removed
}
