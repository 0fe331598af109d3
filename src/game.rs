//! Game instance holding all state
//!
//! Explicit lifecycle: `init` acquires textures and drops the first bomb,
//! `step` runs one frame, `render` draws it, `shutdown` releases everything.

use crate::assets::{Assets, TextureLoader};
use crate::consts::BOMB_FRAME_DURATION;
use crate::error::GameError;
use crate::platform::{Camera, Clock, PointerState};
use crate::renderer::{Animation, Canvas, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

pub struct Game<C: Clock, L: TextureLoader> {
    state: GameState,
    clock: C,
    loader: L,
    assets: Assets,
    spin: Animation,
    camera: Camera,
    idle_mode: bool,
}

impl<C: Clock, L: TextureLoader> Game<C, L> {
    pub fn init(settings: &Settings, clock: C, mut loader: L) -> Result<Self, GameError> {
        let assets = Assets::acquire(&mut loader)?;
        let spin = Animation::new(BOMB_FRAME_DURATION, assets.bomb_frames.len());
        let seed = settings.resolve_seed();
        let state = GameState::new(seed, settings.tuning.clone(), clock.millis());
        let (width, height) = settings.viewport;

        log::info!("Game started (seed {})", seed);
        Ok(Self {
            state,
            clock,
            loader,
            assets,
            spin,
            camera: Camera::new(width, height),
            idle_mode: settings.idle_mode,
        })
    }

    /// Advance one frame using the time elapsed since the previous one
    pub fn step(&mut self, pointer: PointerState) -> Vec<GameEvent> {
        self.clock.mark_frame();
        let dt = self.clock.delta_time();
        let input = TickInput {
            pointer: pointer.position().map(|p| self.camera.unproject(p)),
            idle_mode: self.idle_mode,
        };

        let events = tick(&mut self.state, &input, dt, self.clock.millis());
        for event in &events {
            log_event(event);
        }
        events
    }

    pub fn render<V: Canvas + ?Sized>(&self, canvas: &mut V) {
        draw_frame(canvas, &self.state, &self.assets, &self.spin);
    }

    /// Release textures and hand back the loader and the final state
    pub fn shutdown(self) -> (L, GameState) {
        let Self {
            state,
            mut loader,
            assets,
            ..
        } = self;
        assets.release(&mut loader);
        log::info!(
            "Game over after {} frames: score {}, high score {}",
            state.frame,
            state.score,
            state.high_score
        );
        (loader, state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn set_idle_mode(&mut self, idle_mode: bool) {
        self.idle_mode = idle_mode;
    }
}

fn log_event(event: &GameEvent) {
    match *event {
        GameEvent::Spawned { id, lane } => {
            log::debug!("Bomb {} dropped in lane {}", id, lane.number())
        }
        GameEvent::Caught { id, lane, score } => {
            log::debug!("Bomb {} caught in lane {} (score {})", id, lane.number(), score)
        }
        GameEvent::Missed {
            id,
            lane,
            lost_score,
        } => log::debug!(
            "Bomb {} missed in lane {} (lost {} points)",
            id,
            lane.number(),
            lost_score
        ),
        GameEvent::NewHighScore { high_score } => log::debug!("New high score: {}", high_score),
    }
}
