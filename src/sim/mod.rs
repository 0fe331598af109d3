//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time is passed in, never read
//! - Seeded RNG only
//! - Stable iteration order (bombs oldest first)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod lane;
pub mod state;
pub mod tick;

pub use collision::{Bounds, in_catch_band};
pub use lane::{Lane, same_lane};
pub use state::{Bomb, GameEvent, GameState, Player};
pub use tick::{TickInput, apply_input, spawn_due, tick};
