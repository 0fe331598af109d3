//! Pointer input
//!
//! Hosts report the pointer in screen pixels (origin top-left, y-down). The
//! camera maps that onto the fixed y-up world the simulation uses.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HEIGHT, WIDTH};

/// Pointer/touch state for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PointerState {
    #[default]
    Released,
    Pressed { x: f32, y: f32 },
}

impl PointerState {
    pub fn is_pressed(&self) -> bool {
        matches!(self, PointerState::Pressed { .. })
    }

    /// Screen position while pressed
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            PointerState::Pressed { x, y } => Some(Vec2::new(x, y)),
            PointerState::Released => None,
        }
    }
}

/// Orthographic camera showing the whole playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Viewport size in screen pixels
    pub viewport: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport: Vec2::new(viewport_width, viewport_height),
        }
    }

    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport = Vec2::new(viewport_width, viewport_height);
    }

    /// Screen pixels to world units
    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        let viewport = self.viewport.max(Vec2::ONE);
        Vec2::new(
            screen.x * WIDTH / viewport.x,
            HEIGHT - screen.y * HEIGHT / viewport.y,
        )
    }

    /// World units to screen pixels
    pub fn project(&self, world: Vec2) -> Vec2 {
        Vec2::new(
            world.x * self.viewport.x / WIDTH,
            (HEIGHT - world.y) * self.viewport.y / HEIGHT,
        )
    }
}
