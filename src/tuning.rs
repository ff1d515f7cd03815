//! Physics tuning
//!
//! Every snapshot carries its own copy, so a run can be replayed with the
//! exact constants it was recorded under. Values load from JSON; missing
//! fields fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading tuning data.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid tuning json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tuning value `{field}` must be finite and non-negative, got {value}")]
    Invalid { field: &'static str, value: f32 },
}

/// Physics constants shared by all actors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Horizontal speed while a direction is held (squares/s)
    pub player_speed: f32,
    /// Downward acceleration (squares/s²)
    pub gravity: f32,
    /// Upward speed applied when jumping off a surface (squares/s)
    pub jump_speed: f32,

    // === Enemy ===
    /// Patrol speed toward the player (squares/s)
    pub enemy_speed: f32,
    /// A stomp needs the player's feet higher than this far below the enemy's top
    pub stomp_margin: f32,

    // === Collectible ===
    /// Oscillation rate (rad/s)
    pub wobble_speed: f32,
    /// Peak vertical displacement from the base position
    pub wobble_dist: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 10.0,
            gravity: 30.0,
            jump_speed: 20.0,

            enemy_speed: 3.0,
            stomp_margin: 0.5,

            wobble_speed: 8.0,
            wobble_dist: 0.07,
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON document (partial documents are fine)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the integrator can't make sense of
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("player_speed", self.player_speed),
            ("gravity", self.gravity),
            ("jump_speed", self.jump_speed),
            ("enemy_speed", self.enemy_speed),
            ("stomp_margin", self.stomp_margin),
            ("wobble_speed", self.wobble_speed),
            ("wobble_dist", self.wobble_dist),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid { field, value });
            }
        }
        Ok(())
    }
}
