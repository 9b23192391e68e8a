//! Game-loop controller: the Idle/Running/Over state machine.
//!
//! The host calls [`GameController::run_frame`] once per display frame. Work
//! happens only when a frame has been requested, and a frame is requested
//! again only while the phase is `Running`. Ending the game therefore simply
//! stops re-arming the request.

use super::collision;
use super::obstacles;
use super::session::{GameSession, Phase};
use super::snapshot::{game_over_message, ContainerSize, ObstacleView, PlayerView, Snapshot};
use crate::config::GameConfig;
use crate::constants::START_MESSAGE;
use log::info;
use rand::Rng;

/// Commands the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Start/restart when not running, jump while running.
    Jump,
    /// Any other key; ignored.
    Other,
}

/// What happened during one call to [`GameController::run_frame`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameResult {
    /// False when no frame was pending (Idle or Over).
    pub ran: bool,
    pub spawned: bool,
    /// Points earned this frame.
    pub scored: u32,
    pub pruned: usize,
    pub collided: bool,
    /// Clock time since the previous frame of this session. Measured only;
    /// movement is a fixed step per frame.
    pub delta_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    phase: Phase,
    session: GameSession,
    frame_requested: bool,
    last_frame_ms: Option<u64>,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        let session = GameSession::new(&config);
        Self {
            config,
            phase: Phase::Idle,
            session,
            frame_requested: false,
            last_frame_ms: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Mutable session access for scripted scenarios and tests.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A frame is pending and the next `run_frame` will do work.
    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Apply a key command.
    pub fn handle_input(&mut self, input: GameInput) {
        match input {
            GameInput::Jump => match self.phase {
                Phase::Idle | Phase::Over => self.start(),
                Phase::Running => {
                    self.session.player = self.session.player.jumped(&self.config);
                }
            },
            GameInput::Other => {}
        }
    }

    /// Begin a fresh session. Ignored while already running.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.session = GameSession::new(&self.config);
        self.phase = Phase::Running;
        self.last_frame_ms = None;
        info!("game started");
        self.request_frame();
    }

    /// Run one frame if one is pending.
    pub fn run_frame<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> FrameResult {
        if !self.frame_requested {
            return FrameResult::default();
        }
        self.frame_requested = false;

        let mut result = FrameResult {
            ran: true,
            delta_ms: self.last_frame_ms.map(|last| now_ms.saturating_sub(last)),
            ..Default::default()
        };
        self.last_frame_ms = Some(now_ms);

        let config = &self.config;
        let session = &mut self.session;

        session.player = session.player.integrated(config);

        if let Some(obstacle) =
            obstacles::spawn_if_due(now_ms, session.last_spawn_ms, config, rng)
        {
            session.obstacles.push(obstacle);
            session.last_spawn_ms = Some(now_ms);
            result.spawned = true;
        }
        obstacles::advance(&mut session.obstacles, config.obstacle_speed);
        result.scored = obstacles::award_passes(&mut session.obstacles, config.player_x);
        session.score += result.scored;
        result.pruned = obstacles::prune(&mut session.obstacles);

        result.collided =
            collision::player_hits_obstacle(&session.player, &session.obstacles, config);
        if result.collided {
            self.end_game();
        }

        self.request_frame();
        result
    }

    /// Immutable view for the render step.
    pub fn snapshot(&self) -> Snapshot {
        let message = match self.phase {
            Phase::Idle => Some(START_MESSAGE.to_string()),
            Phase::Running => None,
            Phase::Over => Some(game_over_message(self.session.score)),
        };

        Snapshot {
            phase: self.phase,
            player: PlayerView {
                x: self.config.player_x,
                y: self.session.player.y,
                width: self.config.player_width,
                height: self.config.player_height,
                velocity: self.session.player.velocity,
            },
            obstacles: self
                .session
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    width: o.width,
                    bottom_height: o.height,
                    top_height: o.top_height,
                    passed: o.passed,
                })
                .collect(),
            score: self.session.score,
            message,
            container: ContainerSize {
                width: self.config.container_width,
                height: self.config.container_height,
            },
        }
    }

    fn end_game(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.phase = Phase::Over;
        info!("game over, score {}", self.session.score);
    }

    fn request_frame(&mut self) {
        if self.phase == Phase::Running {
            self.frame_requested = true;
        }
    }
}
