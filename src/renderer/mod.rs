//! Rendering module
//!
//! The game never touches a graphics API. It issues draw calls against a
//! `Canvas`, which the host backs with whatever it renders with.

pub mod animation;
pub mod draw_list;

pub use animation::Animation;
pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

use crate::assets::{Assets, TextureHandle};
use crate::consts::{HIGH_SCORE_Y, HUD_X, SCORE_Y};
use crate::sim::GameState;

/// Sink for draw calls in world coordinates (y-up, bottom-left origin)
pub trait Canvas {
    fn draw_texture(&mut self, texture: TextureHandle, pos: Vec2);
    fn draw_text(&mut self, text: &str, pos: Vec2);
}

/// Draw one frame: background, player, bombs, then the HUD
pub fn draw_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    state: &GameState,
    assets: &Assets,
    spin: &Animation,
) {
    canvas.draw_texture(assets.background, Vec2::ZERO);
    canvas.draw_texture(assets.character, state.player.pos());
    for bomb in &state.bombs {
        let frame = spin.key_frame(bomb.elapsed_time);
        canvas.draw_texture(assets.bomb_frame(frame), bomb.pos());
    }
    canvas.draw_text(&format!("Score: {}", state.score), Vec2::new(HUD_X, SCORE_Y));
    canvas.draw_text(
        &format!("High Score: {}", state.high_score),
        Vec2::new(HUD_X, HIGH_SCORE_Y),
    );
}
