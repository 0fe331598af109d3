//! Data-driven game balance
//!
//! Defaults reproduce the classic game exactly.

use serde::{Deserialize, Serialize};

use crate::consts::{BOMBS_PER_SECOND, FALLING_SPEED};

/// How a spawned bomb's lane is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LaneDistribution {
    /// Draw from 0..=3 and bucket `<1`, `<2`, else; the right lane gets half
    #[default]
    Classic,
    /// One in three for each lane
    Uniform,
}

/// Spawn and fall parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Tuning {
    /// Spawn rate; 0 disables spawning after the initial bomb
    pub bombs_per_second: u64,
    /// Units per second
    pub falling_speed: f32,
    pub lane_distribution: LaneDistribution,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            bombs_per_second: BOMBS_PER_SECOND,
            falling_speed: FALLING_SPEED,
            lane_distribution: LaneDistribution::Classic,
        }
    }
}

impl Tuning {
    /// Minimum milliseconds between spawns (integer division, like the clock)
    pub fn spawn_interval_ms(&self) -> Option<u64> {
        if self.bombs_per_second == 0 {
            None
        } else {
            Some(1000 / self.bombs_per_second)
        }
    }
}
