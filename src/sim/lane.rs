//! The three lanes
//!
//! Positions are stored as a `Lane` rather than a raw x, so an entity can only
//! ever sit exactly on one of the lane constants.

use serde::{Deserialize, Serialize};

use crate::consts::{LANE_1, LANE_2, LANE_3, WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lane {
    Left,
    #[default]
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    /// World x-coordinate of this lane
    #[inline]
    pub fn x(self) -> f32 {
        match self {
            Lane::Left => LANE_1,
            Lane::Center => LANE_2,
            Lane::Right => LANE_3,
        }
    }

    /// Lane whose constant is bit-for-bit equal to `x`; no tolerance.
    pub fn from_x(x: f32) -> Option<Lane> {
        Lane::ALL.into_iter().find(|lane| lane.x().to_bits() == x.to_bits())
    }

    /// Side lane selected by a pointer at world x
    pub fn from_pointer_x(x: f32) -> Lane {
        if x < WIDTH / 2.0 {
            Lane::Left
        } else {
            Lane::Right
        }
    }

    /// 1-based index as shown to players
    pub fn number(self) -> u8 {
        match self {
            Lane::Left => 1,
            Lane::Center => 2,
            Lane::Right => 3,
        }
    }
}

/// True iff both x-coordinates sit exactly on the same lane constant
pub fn same_lane(a_x: f32, b_x: f32) -> bool {
    match (Lane::from_x(a_x), Lane::from_x(b_x)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
