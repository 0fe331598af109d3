//! Vertical collision tests
//!
//! Lanes make horizontal overlap a matter of lane equality, so only the
//! vertical position of a bomb decides whether it is missed or catchable.

use serde::{Deserialize, Serialize};

use crate::consts::{CATCH_BAND, CATCH_LINE};

/// Axis-aligned rectangle, origin at the bottom-left corner (y-up)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Entirely below the bottom edge of the screen
    #[inline]
    pub fn is_below_screen(&self) -> bool {
        self.top() < 0.0
    }
}

/// Bottom edge `y` lies strictly inside the band just under the catch line
#[inline]
pub fn in_catch_band(y: f32) -> bool {
    let offset = y - CATCH_LINE;
    offset < 0.0 && offset > -CATCH_BAND
}
