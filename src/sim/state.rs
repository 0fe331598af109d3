//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives here; there are no globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Bounds;
use super::lane::Lane;
use crate::consts::*;
use crate::tuning::{LaneDistribution, Tuning};

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, lane: Lane },
    Caught { id: u32, lane: Lane, score: u32 },
    /// A bomb fell off the bottom; `lost_score` is what the score was before reset
    Missed { id: u32, lane: Lane, lost_score: u32 },
    NewHighScore { high_score: u32 },
}

/// The catcher at the bottom of the screen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub lane: Lane,
}

impl Player {
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.lane.x(), PLAYER_Y)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.lane.x(), PLAYER_Y, SPRITE_SIZE, SPRITE_SIZE)
    }
}

/// A falling bomb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bomb {
    pub id: u32,
    pub lane: Lane,
    /// Bottom edge, world units
    pub y: f32,
    /// Animation clock (seconds); cosmetic only
    pub elapsed_time: f32,
}

impl Bomb {
    pub fn new(id: u32, lane: Lane, elapsed_time: f32) -> Self {
        Self {
            id,
            lane,
            y: HEIGHT,
            elapsed_time,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.lane.x(), self.y)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.lane.x(), self.y, SPRITE_SIZE, SPRITE_SIZE)
    }
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip, default = "default_rng")]
    rng: Pcg32,
    pub score: u32,
    /// Never decreases
    pub high_score: u32,
    /// Clock reading (ms) of the most recent spawn
    pub last_spawn_ms: u64,
    pub player: Player,
    /// Active bombs, oldest first
    pub bombs: Vec<Bomb>,
    pub tuning: Tuning,
    /// Frames simulated so far
    pub frame: u64,
    next_id: u32,
}

impl GameState {
    /// Create a new game and drop the first bomb at `now_ms`
    pub fn new(seed: u64, tuning: Tuning, now_ms: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            high_score: 0,
            last_spawn_ms: now_ms,
            player: Player::default(),
            bombs: Vec::new(),
            tuning,
            frame: 0,
            next_id: 1,
        };

        state.spawn_bomb(now_ms);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Pick a lane for a new bomb
    pub fn random_lane(&mut self) -> Lane {
        match self.tuning.lane_distribution {
            LaneDistribution::Classic => {
                let roll: u32 = self.rng.random_range(0..=3);
                if roll < 1 {
                    Lane::Left
                } else if roll < 2 {
                    Lane::Center
                } else {
                    Lane::Right
                }
            }
            LaneDistribution::Uniform => Lane::ALL[self.rng.random_range(0..Lane::ALL.len())],
        }
    }

    /// Drop a bomb at the top of the playfield and restart the spawn timer
    pub fn spawn_bomb(&mut self, now_ms: u64) -> GameEvent {
        let id = self.next_entity_id();
        let lane = self.random_lane();
        let elapsed_time = self.rng.random_range(0.0..BOMB_ANIMATION_OFFSET_MAX);
        self.bombs.push(Bomb::new(id, lane, elapsed_time));
        self.last_spawn_ms = now_ms;
        GameEvent::Spawned { id, lane }
    }

    /// Register a catch; returns the new-high-score event if one was set
    pub fn record_catch(&mut self) -> Option<GameEvent> {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
            Some(GameEvent::NewHighScore {
                high_score: self.high_score,
            })
        } else {
            None
        }
    }

    /// Register a miss; returns the score that was lost
    pub fn record_miss(&mut self) -> u32 {
        std::mem::take(&mut self.score)
    }
}
