//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep, no clocks
//! - Injected RNG only
//! - Stable actor order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorKind, Collectible, Hazard, HazardKind, PatrollingEnemy, Player};
pub use collision::Aabb;
pub use level::{LevelError, LevelGrid, Spawn, SpawnKind, Tile};
pub use state::{FrameView, GameState, GameStatus};
pub use tick::{TickInput, tick};
