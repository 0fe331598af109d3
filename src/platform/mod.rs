//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time/ticks
//! - Pointer input and screen-to-world mapping

pub mod input;
pub mod time;

pub use input::{Camera, PointerState};
pub use time::{Clock, ManualClock, SystemClock};
