//! Demo-mode player
//!
//! Chases the lowest bomb that can still be caught, expressed as the same
//! pointer a human would produce.

use glam::Vec2;

use super::lane::Lane;
use super::state::GameState;
use crate::consts::{CATCH_BAND, CATCH_LINE, HEIGHT, WIDTH};

/// Lane the autopilot wants to stand in, if any bomb is still catchable
pub fn target_lane(state: &GameState) -> Option<Lane> {
    state
        .bombs
        .iter()
        .filter(|b| b.y > CATCH_LINE - CATCH_BAND)
        .min_by(|a, b| a.y.total_cmp(&b.y))
        .map(|b| b.lane)
}

/// World-space pointer that moves the player into the target lane
pub fn pointer_for(state: &GameState) -> Option<Vec2> {
    match target_lane(state)? {
        Lane::Left => Some(Vec2::new(WIDTH * 0.25, HEIGHT * 0.5)),
        Lane::Right => Some(Vec2::new(WIDTH * 0.75, HEIGHT * 0.5)),
        // Releasing the pointer snaps to center
        Lane::Center => None,
    }
}
