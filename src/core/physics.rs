//! Player vertical physics.
//!
//! Positions are measured upward from the floor. Integration is a fixed step
//! per frame and is not scaled by elapsed time.

use crate::config::GameConfig;

/// Vertical state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerState {
    /// Height above the floor (never below `floor_y` after integration).
    pub y: f64,
    /// Upward velocity in units/tick (positive = rising).
    pub velocity: f64,
}

impl PlayerState {
    /// Player standing on the floor.
    pub fn on_floor(config: &GameConfig) -> Self {
        Self {
            y: config.floor_y,
            velocity: 0.0,
        }
    }

    /// Apply one tick of gravity and motion, clamping to the floor.
    #[must_use]
    pub fn integrated(self, config: &GameConfig) -> Self {
        let velocity = self.velocity - config.gravity;
        let y = self.y + velocity;
        if y <= config.floor_y {
            Self {
                y: config.floor_y,
                velocity: 0.0,
            }
        } else {
            Self { y, velocity }
        }
    }

    /// Override velocity with the jump impulse, whatever it was before.
    #[must_use]
    pub fn jumped(self, config: &GameConfig) -> Self {
        Self {
            velocity: config.jump_strength,
            ..self
        }
    }

    pub fn is_on_floor(&self, config: &GameConfig) -> bool {
        self.y <= config.floor_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_reduces_velocity_and_height() {
        let config = GameConfig::default();
        let state = PlayerState {
            y: 100.0,
            velocity: 0.0,
        };
        let next = state.integrated(&config);
        assert!((next.velocity - (-0.6)).abs() < 1e-9);
        assert!((next.y - 99.4).abs() < 1e-9);
    }

    #[test]
    fn test_floor_clamp_zeroes_velocity() {
        let config = GameConfig::default();
        let state = PlayerState {
            y: 1.0,
            velocity: -5.0,
        };
        let next = state.integrated(&config);
        assert_eq!(next.y, 0.0);
        assert_eq!(next.velocity, 0.0);
        assert!(next.is_on_floor(&config));
    }

    #[test]
    fn test_resting_on_floor_stays_put() {
        let config = GameConfig::default();
        let mut state = PlayerState::on_floor(&config);
        for _ in 0..20 {
            state = state.integrated(&config);
            assert_eq!(state, PlayerState::on_floor(&config));
        }
    }

    #[test]
    fn test_jump_overrides_any_velocity() {
        let config = GameConfig::default();
        for velocity in [-40.0, -0.6, 0.0, 3.0, 99.0] {
            let state = PlayerState { y: 42.0, velocity };
            let jumped = state.jumped(&config);
            assert_eq!(jumped.velocity, 15.0);
            assert_eq!(jumped.y, 42.0);
        }
    }

    #[test]
    fn test_jump_then_integrate_rises() {
        let config = GameConfig::default();
        let state = PlayerState::on_floor(&config).jumped(&config).integrated(&config);
        assert!((state.y - 14.4).abs() < 1e-9);
        assert!((state.velocity - 14.4).abs() < 1e-9);
    }

    #[test]
    fn test_apex_then_fall_back_to_floor() {
        let config = GameConfig::default();
        let mut state = PlayerState::on_floor(&config).jumped(&config);
        let mut peak: f64 = 0.0;
        let mut ticks = 0;
        loop {
            state = state.integrated(&config);
            peak = peak.max(state.y);
            ticks += 1;
            if state.is_on_floor(&config) || ticks > 1000 {
                break;
            }
        }
        assert!(state.is_on_floor(&config));
        // y(n) = 15n - 0.3n(n+1): apex 180 at n = 24/25, back on the floor at n = 49
        assert!((49..=50).contains(&ticks), "took {} ticks", ticks);
        assert!((peak - 180.0).abs() < 1e-6, "peak {}", peak);
    }
}
