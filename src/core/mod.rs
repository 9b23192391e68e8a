//! Core simulation: physics, obstacles, collision and the frame loop.

pub mod collision;
pub mod game_loop;
pub mod obstacles;
pub mod physics;
pub mod session;
pub mod snapshot;

pub use collision::{any_collision, Bounds};
pub use game_loop::{FrameResult, GameController, GameInput};
pub use obstacles::Obstacle;
pub use physics::PlayerState;
pub use session::{GameSession, Phase};
pub use snapshot::Snapshot;
