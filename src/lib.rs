//! Bomb Lanes - A three-lane arcade reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, spawning, catching, score)
//! - `renderer`: Draw-call collaborator and sprite animation
//! - `platform`: Clock and pointer abstraction
//! - `assets`: Texture handle acquisition and release
//! - `tuning`: Data-driven game balance
//! - `game`: init / step / shutdown lifecycle

pub mod assets;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::Game;
pub use settings::Settings;
pub use tuning::{LaneDistribution, Tuning};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (world units, y-up)
    pub const WIDTH: f32 = 480.0;
    pub const HEIGHT: f32 = 800.0;

    /// Player and bomb sprites are square
    pub const SPRITE_SIZE: f32 = 64.0;
    /// Gap between adjacent lanes
    pub const LANE_GAP: f32 = 32.0;

    /// Lane x-coordinates (left edge of the sprite)
    pub const LANE_1: f32 = WIDTH / 2.0 - SPRITE_SIZE - LANE_GAP - SPRITE_SIZE / 2.0;
    pub const LANE_2: f32 = WIDTH / 2.0 - SPRITE_SIZE / 2.0;
    pub const LANE_3: f32 = WIDTH / 2.0 + SPRITE_SIZE + LANE_GAP - SPRITE_SIZE / 2.0;

    /// Bottom edge of the player, above the screen bottom
    pub const PLAYER_Y: f32 = 20.0;
    /// Bombs are caught when they cross this line...
    pub const CATCH_LINE: f32 = PLAYER_Y + SPRITE_SIZE;
    /// ...while still within this many units below it
    pub const CATCH_BAND: f32 = 20.0;

    /// Falling speed (units/s)
    pub const FALLING_SPEED: f32 = 500.0;
    pub const BOMBS_PER_SECOND: u64 = 5;

    /// Bomb spin animation frame duration (seconds)
    pub const BOMB_FRAME_DURATION: f32 = 1.0 / 36.0;
    /// Upper bound of the random animation offset given to new bombs
    pub const BOMB_ANIMATION_OFFSET_MAX: f32 = 100.0;

    /// HUD text positions
    pub const HUD_X: f32 = 10.0;
    pub const SCORE_Y: f32 = HEIGHT - 10.0;
    pub const HIGH_SCORE_Y: f32 = HEIGHT - 30.0;
}
