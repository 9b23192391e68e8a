// Frame pacing
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS

// Player physics (units per tick, world units are container pixels)
pub const GRAVITY: f64 = 0.6;
pub const JUMP_STRENGTH: f64 = 15.0;
pub const FLOOR_Y: f64 = 0.0;

// Player geometry
pub const PLAYER_X: f64 = 50.0; // fixed left edge, also the scoring line
pub const PLAYER_WIDTH: f64 = 30.0;
pub const PLAYER_HEIGHT: f64 = 30.0;

// Obstacles
pub const OBSTACLE_SPEED: f64 = 4.0;
pub const OBSTACLE_SPAWN_INTERVAL_MS: u64 = 1500;
pub const OBSTACLE_WIDTH: f64 = 30.0;
pub const OBSTACLE_MIN_HEIGHT: f64 = 50.0;
pub const OBSTACLE_MAX_HEIGHT: f64 = 200.0;
pub const GAP_HEIGHT: f64 = 100.0;

// Container (the fixed play surface)
pub const CONTAINER_WIDTH: f64 = 600.0;
pub const CONTAINER_HEIGHT: f64 = 400.0;

// Files under ~/.skyhop/
pub const APP_DIR_NAME: &str = ".skyhop";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "skyhop.log";

// Overlay text
pub const START_MESSAGE: &str = "Press SPACE to Start and Jump!";
