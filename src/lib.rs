//! Skyhop - terminal pipe-dodging arcade game.
//!
//! The library holds the simulation and the snapshot renderer; the binary is
//! a thin terminal host around them.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod core;
pub mod input;
pub mod logging;
pub mod ui;
pub mod utils;

pub use config::GameConfig;
pub use constants::*;
pub use crate::core::{
    any_collision, Bounds, FrameResult, GameController, GameInput, GameSession, Obstacle, Phase,
    PlayerState, Snapshot,
};
