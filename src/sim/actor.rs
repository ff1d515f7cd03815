//! Actors: the dynamic entities of a level
//!
//! Every actor kind is a flat struct with its own update rule. [`Actor`]
//! wraps them in a sum type so the game state can hold one ordered list.
//! Updates read the pre-tick snapshot and return a fresh value; nothing is
//! mutated in place.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::collision::Aabb;
use super::level::{LevelGrid, Spawn, SpawnKind, Tile};
use super::state::{GameState, GameStatus};
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::Tuning;

/// Actor kinds (for renderers and queries)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Hazard,
    PatrollingEnemy,
    Collectible,
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Player {
    pub fn spawn(id: u32, cell: Vec2) -> Self {
        Self {
            id,
            pos: cell + PLAYER_SPAWN_OFFSET,
            vel: Vec2::ZERO,
        }
    }

    /// -1 facing left, 1 facing right, 0 when not moving horizontally
    pub fn facing(&self) -> i8 {
        if self.vel.x < 0.0 {
            -1
        } else if self.vel.x > 0.0 {
            1
        } else {
            0
        }
    }

    /// Advance one tick: horizontal move, then gravity and vertical move
    ///
    /// Each axis moves only if the new box stays clear of walls, so the
    /// player approaches a wall but never overlaps it. Hitting something
    /// while falling with jump held launches the player upward; any other
    /// vertical contact (floor without jump, or a ceiling) stops vertical
    /// motion.
    pub fn update(&self, dt: f32, level: &LevelGrid, tuning: &Tuning, input: &TickInput) -> Self {
        let mut vel_x = 0.0;
        if input.move_left {
            vel_x -= tuning.player_speed;
        }
        if input.move_right {
            vel_x += tuning.player_speed;
        }

        let mut pos = self.pos + Vec2::new(vel_x * dt, 0.0);
        if level.touches(pos, PLAYER_SIZE, Tile::Wall) {
            pos = self.pos;
        }

        let mut vel_y = self.vel.y + tuning.gravity * dt;
        let next = pos + Vec2::new(0.0, vel_y * dt);
        if level.touches(next, PLAYER_SIZE, Tile::Wall) {
            vel_y = if vel_y > 0.0 && input.jump {
                -tuning.jump_speed
            } else {
                0.0
            };
        } else {
            pos = next;
        }

        Self {
            id: self.id,
            pos,
            vel: Vec2::new(vel_x, vel_y),
        }
    }
}

/// Moving lava variants, fixed at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    /// Bounces left and right
    Horizontal,
    /// Bounces up and down
    Vertical,
    /// Falls, then restarts from its spawn cell
    Dripping,
}

/// Moving lava
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub kind: HazardKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Where a dripping hazard restarts after hitting a wall
    pub reset: Option<Vec2>,
}

impl Hazard {
    pub fn spawn(id: u32, kind: HazardKind, cell: Vec2) -> Self {
        let (vel, reset) = match kind {
            HazardKind::Horizontal => (HAZARD_HORIZONTAL_VELOCITY, None),
            HazardKind::Vertical => (HAZARD_VERTICAL_VELOCITY, None),
            HazardKind::Dripping => (HAZARD_DRIP_VELOCITY, Some(cell)),
        };
        Self {
            id,
            kind,
            pos: cell,
            vel,
            reset,
        }
    }

    /// Move along the path; on wall contact restart (dripping) or bounce back
    pub fn update(&self, dt: f32, level: &LevelGrid) -> Self {
        let next = self.pos + self.vel * dt;
        if !level.touches(next, HAZARD_SIZE, Tile::Wall) {
            Self { pos: next, ..*self }
        } else if let Some(reset) = self.reset {
            Self { pos: reset, ..*self }
        } else {
            Self {
                vel: self.vel * -1.0,
                ..*self
            }
        }
    }

    /// Touching moving lava always loses the level
    pub fn collide(&self, state: GameState) -> GameState {
        log::info!("Player touched moving lava (hazard {})", self.id);
        state.finish(GameStatus::Lost)
    }
}

/// Ground enemy that walks toward the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatrollingEnemy {
    pub id: u32,
    pub pos: Vec2,
}

impl PatrollingEnemy {
    pub fn spawn(id: u32, cell: Vec2) -> Self {
        Self {
            id,
            pos: cell + ENEMY_SPAWN_OFFSET,
        }
    }

    /// Step toward the player's x; stall in place if a wall is in the way
    ///
    /// Direction is recomputed from scratch each tick.
    pub fn update(&self, dt: f32, state: &GameState) -> Self {
        let Some(player) = state.player() else {
            return *self;
        };
        let direction = if self.pos.x > player.pos.x { -1.0 } else { 1.0 };
        let next = self.pos + Vec2::new(direction * state.tuning().enemy_speed * dt, 0.0);
        if state.level().touches(next, ENEMY_SIZE, Tile::Wall) {
            return *self;
        }
        Self { pos: next, ..*self }
    }

    /// Landing on top stomps the enemy; any other contact loses the level
    pub fn collide(&self, state: GameState) -> GameState {
        let Some(player) = state.player() else {
            return state;
        };
        let feet = player.pos.y + PLAYER_SIZE.y;
        if feet < self.pos.y + state.tuning().stomp_margin {
            log::debug!("Enemy {} stomped", self.id);
            state.remove_actor(self.id)
        } else {
            log::info!("Player caught by enemy {}", self.id);
            state.finish(GameStatus::Lost)
        }
    }
}

/// Bobbing coin; collecting the last one wins the level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    /// Displayed position (base plus wobble)
    pub pos: Vec2,
    pub base_pos: Vec2,
    /// Oscillation phase (radians)
    pub phase: f32,
}

impl Collectible {
    pub fn spawn<R: Rng>(id: u32, cell: Vec2, rng: &mut R) -> Self {
        let base_pos = cell + COLLECTIBLE_SPAWN_OFFSET;
        Self {
            id,
            pos: base_pos,
            base_pos,
            phase: rng.random_range(0.0..TAU),
        }
    }

    pub fn update(&self, dt: f32, tuning: &Tuning) -> Self {
        let phase = self.phase + tuning.wobble_speed * dt;
        let wobble = phase.sin() * tuning.wobble_dist;
        Self {
            pos: self.base_pos + Vec2::new(0.0, wobble),
            phase,
            ..*self
        }
    }

    /// Remove this coin; win if it was the last
    pub fn collide(&self, state: GameState) -> GameState {
        let state = state.remove_actor(self.id);
        let remaining = state
            .actors()
            .iter()
            .filter(|a| a.kind() == ActorKind::Collectible)
            .count();
        if remaining == 0 {
            log::info!("Last collectible picked up");
            state.finish(GameStatus::Won)
        } else {
            log::debug!("Collectible {} picked up, {} left", self.id, remaining);
            state
        }
    }
}

/// Any dynamic entity in a level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Actor {
    Player(Player),
    Hazard(Hazard),
    PatrollingEnemy(PatrollingEnemy),
    Collectible(Collectible),
}

impl Actor {
    /// Create the actor a plan spawn record describes
    pub fn spawn<R: Rng>(id: u32, spawn: &Spawn, rng: &mut R) -> Self {
        match spawn.kind {
            SpawnKind::Player => Actor::Player(Player::spawn(id, spawn.cell)),
            SpawnKind::Collectible => Actor::Collectible(Collectible::spawn(id, spawn.cell, rng)),
            SpawnKind::HazardHorizontal => {
                Actor::Hazard(Hazard::spawn(id, HazardKind::Horizontal, spawn.cell))
            }
            SpawnKind::HazardVertical => {
                Actor::Hazard(Hazard::spawn(id, HazardKind::Vertical, spawn.cell))
            }
            SpawnKind::HazardDripping => {
                Actor::Hazard(Hazard::spawn(id, HazardKind::Dripping, spawn.cell))
            }
            SpawnKind::PatrollingEnemy => {
                Actor::PatrollingEnemy(PatrollingEnemy::spawn(id, spawn.cell))
            }
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Actor::Player(p) => p.id,
            Actor::Hazard(h) => h.id,
            Actor::PatrollingEnemy(e) => e.id,
            Actor::Collectible(c) => c.id,
        }
    }

    pub fn kind(&self) -> ActorKind {
        match self {
            Actor::Player(_) => ActorKind::Player,
            Actor::Hazard(_) => ActorKind::Hazard,
            Actor::PatrollingEnemy(_) => ActorKind::PatrollingEnemy,
            Actor::Collectible(_) => ActorKind::Collectible,
        }
    }

    /// Top-left corner
    pub fn pos(&self) -> Vec2 {
        match self {
            Actor::Player(p) => p.pos,
            Actor::Hazard(h) => h.pos,
            Actor::PatrollingEnemy(e) => e.pos,
            Actor::Collectible(c) => c.pos,
        }
    }

    /// Box size, constant per kind
    pub fn size(&self) -> Vec2 {
        match self {
            Actor::Player(_) => PLAYER_SIZE,
            Actor::Hazard(_) => HAZARD_SIZE,
            Actor::PatrollingEnemy(_) => ENEMY_SIZE,
            Actor::Collectible(_) => COLLECTIBLE_SIZE,
        }
    }

    /// Velocity for kinds that track one (facing/animation hints)
    pub fn velocity(&self) -> Option<Vec2> {
        match self {
            Actor::Player(p) => Some(p.vel),
            Actor::Hazard(h) => Some(h.vel),
            _ => None,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos(), self.size())
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Actor::Player(p) => Some(p),
            _ => None,
        }
    }

    /// Advance one tick against the pre-tick snapshot
    pub fn update(&self, dt: f32, state: &GameState, input: &TickInput) -> Actor {
        match self {
            Actor::Player(p) => Actor::Player(p.update(dt, state.level(), state.tuning(), input)),
            Actor::Hazard(h) => Actor::Hazard(h.update(dt, state.level())),
            Actor::PatrollingEnemy(e) => Actor::PatrollingEnemy(e.update(dt, state)),
            Actor::Collectible(c) => Actor::Collectible(c.update(dt, state.tuning())),
        }
    }

    /// React to overlapping the player; the player itself has no reaction
    pub fn collide(&self, state: GameState) -> GameState {
        match self {
            Actor::Player(_) => state,
            Actor::Hazard(h) => h.collide(state),
            Actor::PatrollingEnemy(e) => e.collide(state),
            Actor::Collectible(c) => c.collide(state),
        }
    }
}
