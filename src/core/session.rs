//! State of a single play-through.

use super::obstacles::Obstacle;
use super::physics::PlayerState;
use crate::config::GameConfig;

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first start command.
    Idle,
    Running,
    /// Collided; waiting for a restart command.
    Over,
}

/// Everything that changes while playing. A new session is built on every
/// start, so nothing leaks from one run into the next.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub player: PlayerState,
    /// Ordered by spawn time, which is also left-to-right order.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Clock reading of the last spawn; `None` until the first one.
    pub last_spawn_ms: Option<u64>,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: PlayerState::on_floor(config),
            obstacles: Vec::new(),
            score: 0,
            last_spawn_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::new(&GameConfig::default());
        assert_eq!(session.score, 0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.player.y, 0.0);
        assert_eq!(session.player.velocity, 0.0);
        assert!(session.last_spawn_ms.is_none());
    }
}
