//! Texture handles
//!
//! Acquired once when the game starts, released once when it shuts down.
//! Decoding and uploading is the loader's business; the game only keeps the
//! opaque handles.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const BACKGROUND_PATH: &str = "bg.png";
pub const CHARACTER_PATH: &str = "character.png";
pub const BOMB_ATLAS_PATH: &str = "spritesheet.atlas";

/// Opaque handle issued by a `TextureLoader`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

pub trait TextureLoader {
    fn load(&mut self, path: &str) -> Result<TextureHandle, GameError>;

    /// Every region of an atlas, in frame order
    fn load_atlas(&mut self, path: &str) -> Result<Vec<TextureHandle>, GameError>;

    fn release(&mut self, texture: TextureHandle);
}

/// All textures the game draws with
#[derive(Debug)]
pub struct Assets {
    pub background: TextureHandle,
    pub character: TextureHandle,
    /// Never empty
    pub bomb_frames: Vec<TextureHandle>,
}

impl Assets {
    pub fn acquire<L: TextureLoader + ?Sized>(loader: &mut L) -> Result<Self, GameError> {
        let bomb_frames = loader.load_atlas(BOMB_ATLAS_PATH)?;
        if bomb_frames.is_empty() {
            return Err(GameError::EmptyAtlas(BOMB_ATLAS_PATH.to_string()));
        }
        // Nothing half-loaded survives a failed acquire
        let character = match loader.load(CHARACTER_PATH) {
            Ok(texture) => texture,
            Err(e) => {
                release_all(loader, bomb_frames);
                return Err(e);
            }
        };
        let background = match loader.load(BACKGROUND_PATH) {
            Ok(texture) => texture,
            Err(e) => {
                release_all(loader, bomb_frames);
                loader.release(character);
                return Err(e);
            }
        };

        log::info!("Loaded textures ({} bomb frames)", bomb_frames.len());
        Ok(Self {
            background,
            character,
            bomb_frames,
        })
    }

    pub fn bomb_frame(&self, index: usize) -> TextureHandle {
        self.bomb_frames[index % self.bomb_frames.len()]
    }

    /// Hand every texture back to the loader
    pub fn release<L: TextureLoader + ?Sized>(self, loader: &mut L) {
        release_all(loader, self.bomb_frames);
        loader.release(self.character);
        loader.release(self.background);
        log::info!("Released textures");
    }
}

fn release_all<L: TextureLoader + ?Sized>(loader: &mut L, textures: Vec<TextureHandle>) {
    for texture in textures {
        loader.release(texture);
    }
}

/// Loader with no GPU behind it; tracks which handles are live
#[derive(Debug, Default)]
pub struct HeadlessLoader {
    atlas_frames: u32,
    next: u32,
    live: HashSet<TextureHandle>,
    /// Paths that fail to load
    pub missing: Vec<String>,
    /// Handles released more than once, or never issued
    pub bad_releases: Vec<TextureHandle>,
}

impl HeadlessLoader {
    pub fn new(atlas_frames: u32) -> Self {
        Self {
            atlas_frames,
            ..Default::default()
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn issue(&mut self) -> TextureHandle {
        let handle = TextureHandle(self.next);
        self.next += 1;
        self.live.insert(handle);
        handle
    }

    fn check(&self, path: &str) -> Result<(), GameError> {
        if self.missing.iter().any(|m| m == path) {
            Err(GameError::AssetNotFound(path.to_string()))
        } else {
            Ok(())
        }
    }
}

impl TextureLoader for HeadlessLoader {
    fn load(&mut self, path: &str) -> Result<TextureHandle, GameError> {
        self.check(path)?;
        Ok(self.issue())
    }

    fn load_atlas(&mut self, path: &str) -> Result<Vec<TextureHandle>, GameError> {
        self.check(path)?;
        Ok((0..self.atlas_frames).map(|_| self.issue()).collect())
    }

    fn release(&mut self, texture: TextureHandle) {
        if !self.live.remove(&texture) {
            log::warn!("Release of unknown texture {:?}", texture);
            self.bad_releases.push(texture);
        }
    }
}
