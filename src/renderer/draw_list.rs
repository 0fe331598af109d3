//! Recorded draw calls
//!
//! Used by the headless runner and by tests to inspect what a frame drew.

use glam::Vec2;

use super::Canvas;
use crate::assets::TextureHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Texture { texture: TextureHandle, pos: Vec2 },
    Text { text: String, pos: Vec2 },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Texture { .. } => None,
        })
    }
}

impl Canvas for DrawList {
    fn draw_texture(&mut self, texture: TextureHandle, pos: Vec2) {
        self.commands.push(DrawCommand::Texture { texture, pos });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
        });
    }
}
