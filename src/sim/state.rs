//! Game state snapshots
//!
//! A `GameState` is one instant of a level. Ticks never modify a snapshot;
//! they build a new one, so history can be kept and replayed freely.

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, Player};
use super::level::LevelGrid;
use super::tick::{TickInput, tick};
use crate::tuning::Tuning;

/// Outcome of the level so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::Playing
    }
}

/// Immutable world snapshot
#[derive(Debug, Clone)]
pub struct GameState {
    /// Shared, read-only for the whole run
    level: Arc<LevelGrid>,
    /// Stable order; collisions are resolved in this order
    actors: Vec<Actor>,
    status: GameStatus,
    tuning: Tuning,
}

impl GameState {
    /// Start a level with default tuning and a seeded RNG
    pub fn start(level: Arc<LevelGrid>, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::start_with(level, Tuning::default(), &mut rng)
    }

    /// Start a level with explicit tuning and random source
    ///
    /// The RNG only picks collectible wobble phases.
    pub fn start_with<R: Rng>(level: Arc<LevelGrid>, tuning: Tuning, rng: &mut R) -> Self {
        let actors = level
            .spawns()
            .iter()
            .enumerate()
            .map(|(id, spawn)| Actor::spawn(id as u32, spawn, &mut *rng))
            .collect();

        Self {
            level,
            actors,
            status: GameStatus::Playing,
            tuning,
        }
    }

    /// Same level and tuning, different actors and status
    pub(crate) fn with_actors(&self, actors: Vec<Actor>) -> Self {
        Self {
            level: Arc::clone(&self.level),
            actors,
            status: self.status,
            tuning: self.tuning,
        }
    }

    pub fn level(&self) -> &LevelGrid {
        &self.level
    }

    /// Shared handle to the level (for starting a retry)
    pub fn level_handle(&self) -> Arc<LevelGrid> {
        Arc::clone(&self.level)
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// The player actor; always present in states built by [`GameState::start`]
    pub fn player(&self) -> Option<&Player> {
        self.actors.iter().find_map(Actor::as_player)
    }

    /// Advance the simulation by `dt` seconds
    pub fn update(&self, dt: f32, input: &TickInput) -> GameState {
        tick(self, input, dt)
    }

    /// End the level. Only a playing level can finish; a finished one keeps
    /// its outcome.
    pub fn finish(mut self, status: GameStatus) -> Self {
        if self.status == GameStatus::Playing && status.is_terminal() {
            log::info!("Level {}", status.as_str());
            self.status = status;
        }
        self
    }

    /// Drop the actor with the given id
    pub fn remove_actor(mut self, id: u32) -> Self {
        self.actors.retain(|a| a.id() != id);
        self
    }

    /// Renderer-facing view of this snapshot
    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            status: self.status,
            width: self.level.width(),
            height: self.level.height(),
            actors: &self.actors,
        }
    }
}

/// What a renderer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameView<'a> {
    pub status: GameStatus,
    pub width: usize,
    pub height: usize,
    pub actors: &'a [Actor],
}

impl FrameView<'_> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
