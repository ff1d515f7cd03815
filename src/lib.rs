//! Lava Leap - a tile-based platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level grid, actors, collisions, game state)
//! - `tuning`: Data-driven physics constants
//! - `levels`: Built-in level plans
//!
//! Rendering, input capture, frame scheduling and level progression live
//! outside this crate. A driver feeds [`sim::TickInput`] and elapsed seconds
//! into [`sim::GameState::update`] and draws whatever [`sim::GameState::frame`]
//! returns.

pub mod levels;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Fixed geometry and spawn constants (not tunable)
pub mod consts {
    use glam::Vec2;

    /// Timestep used by the headless driver (60 Hz)
    pub const DRIVER_DT: f32 = 1.0 / 60.0;
    /// Largest frame delta the driver will hand to the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Seconds a finished level keeps animating before the driver stops
    pub const ENDING_DELAY: f32 = 1.0;

    /// Player is 1.5 squares tall and 0.8 wide
    pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.5);
    /// Lifts the player so its feet sit on the bottom of its spawn cell
    pub const PLAYER_SPAWN_OFFSET: Vec2 = Vec2::new(0.0, -0.5);

    /// Moving lava fills exactly one cell
    pub const HAZARD_SIZE: Vec2 = Vec2::new(1.0, 1.0);
    pub const HAZARD_HORIZONTAL_VELOCITY: Vec2 = Vec2::new(2.0, 0.0);
    pub const HAZARD_VERTICAL_VELOCITY: Vec2 = Vec2::new(0.0, 2.0);
    pub const HAZARD_DRIP_VELOCITY: Vec2 = Vec2::new(0.0, 3.0);

    /// Patrolling enemy is two squares tall
    pub const ENEMY_SIZE: Vec2 = Vec2::new(1.2, 2.0);
    pub const ENEMY_SPAWN_OFFSET: Vec2 = Vec2::new(0.0, -1.0);

    pub const COLLECTIBLE_SIZE: Vec2 = Vec2::new(0.6, 0.6);
    /// Centers the collectible inside its cell
    pub const COLLECTIBLE_SPAWN_OFFSET: Vec2 = Vec2::new(0.2, 0.1);
}
