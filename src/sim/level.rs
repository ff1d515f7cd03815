//! Static level grid
//!
//! A level is built once from a text plan and never changes afterwards.
//! Each character is either a tile or an actor spawn; spawn cells are
//! stored as empty tiles.

use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while parsing a level plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level plan is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown plan character {ch:?} at row {row}, column {col}")]
    UnknownCharacter { ch: char, row: usize, col: usize },

    #[error("level has no player spawn")]
    MissingPlayer,

    #[error("level has {0} player spawns, expected exactly one")]
    MultiplePlayers(usize),
}

/// Static tile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    /// Lethal on contact
    HazardField,
}

impl Tile {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Tile::Empty),
            '#' => Some(Tile::Wall),
            '+' => Some(Tile::HazardField),
            _ => None,
        }
    }
}

/// Actor kinds a plan can spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    Player,
    Collectible,
    /// `=` lava bouncing left and right
    HazardHorizontal,
    /// `|` lava bouncing up and down
    HazardVertical,
    /// `v` lava that falls and restarts from its spawn
    HazardDripping,
    PatrollingEnemy,
}

impl SpawnKind {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '@' => Some(SpawnKind::Player),
            'o' => Some(SpawnKind::Collectible),
            '=' => Some(SpawnKind::HazardHorizontal),
            '|' => Some(SpawnKind::HazardVertical),
            'v' => Some(SpawnKind::HazardDripping),
            'M' => Some(SpawnKind::PatrollingEnemy),
            _ => None,
        }
    }
}

/// An actor spawn record: what appears, and at which cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub kind: SpawnKind,
    /// Top-left corner of the spawn cell
    pub cell: Vec2,
}

/// Immutable tile grid plus the spawn list it was declared with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelGrid {
    width: usize,
    height: usize,
    /// Row-major tiles
    tiles: Vec<Tile>,
    spawns: Vec<Spawn>,
}

impl LevelGrid {
    /// Build a level from its text plan
    pub fn parse(plan: &str) -> Result<Self, LevelError> {
        let rows: Vec<&str> = plan.trim().lines().collect();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(LevelError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut spawns = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LevelError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, ch) in row.chars().enumerate() {
                if let Some(tile) = Tile::from_char(ch) {
                    tiles.push(tile);
                } else if let Some(kind) = SpawnKind::from_char(ch) {
                    tiles.push(Tile::Empty);
                    spawns.push(Spawn {
                        kind,
                        cell: Vec2::new(x as f32, y as f32),
                    });
                } else {
                    return Err(LevelError::UnknownCharacter { ch, row: y, col: x });
                }
            }
        }

        match spawns.iter().filter(|s| s.kind == SpawnKind::Player).count() {
            0 => return Err(LevelError::MissingPlayer),
            1 => {}
            n => return Err(LevelError::MultiplePlayers(n)),
        }

        log::debug!(
            "Parsed level {}x{} with {} spawns",
            width,
            rows.len(),
            spawns.len()
        );

        Ok(Self {
            width,
            height: rows.len(),
            tiles,
            spawns,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Spawn records in plan order (row-major)
    pub fn spawns(&self) -> &[Spawn] {
        &self.spawns
    }

    /// Tile at a cell; everything outside the grid is wall
    pub fn tile(&self, x: i64, y: i64) -> Tile {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return Tile::Wall;
        }
        self.tiles[y as usize * self.width + x as usize]
    }

    /// Whether any cell covered by the box at `pos` with `size` is `kind`
    ///
    /// Covered cells run from floor(pos) up to but not including
    /// ceil(pos + size), so a box whose edge lies exactly on a cell
    /// boundary does not reach into the next cell.
    pub fn touches(&self, pos: Vec2, size: Vec2, kind: Tile) -> bool {
        let start_x = pos.x.floor() as i64;
        let start_y = pos.y.floor() as i64;
        let end_x = (pos.x + size.x).ceil() as i64;
        let end_y = (pos.y + size.y).ceil() as i64;

        (start_y..end_y).any(|y| (start_x..end_x).any(|x| self.tile(x, y) == kind))
    }
}

impl FromStr for LevelGrid {
    type Err = LevelError;

    fn from_str(plan: &str) -> Result<Self, Self::Err> {
        Self::parse(plan)
    }
}
