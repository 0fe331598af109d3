//! Bomb Lanes entry point
//!
//! Native builds run a headless demo: the autopilot (or an idle player) plays
//! for a fixed number of frames on a simulated clock, and the run is logged.
//! Set `RUST_LOG=debug` to see every spawn, catch and miss.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bomb Lanes (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `Game` directly; nothing to do here
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), bomb_lanes::GameError> {
    use bomb_lanes::assets::HeadlessLoader;
    use bomb_lanes::platform::{ManualClock, PointerState};
    use bomb_lanes::renderer::DrawList;
    use bomb_lanes::sim::GameEvent;
    use bomb_lanes::{Game, Settings};

    // Nobody holds the pointer in a headless run, so the autopilot plays
    let settings = Settings {
        idle_mode: true,
        ..Settings::load()
    };
    let fps = settings.demo_fps.max(1);
    let dt = 1.0 / fps as f32;

    let mut game = Game::init(&settings, ManualClock::new(), HeadlessLoader::new(16))?;
    let mut canvas = DrawList::new();
    let (mut caught, mut missed) = (0u32, 0u32);

    for frame in 0..settings.demo_frames {
        game.clock_mut().advance(dt);
        for event in game.step(PointerState::Released) {
            match event {
                GameEvent::Caught { .. } => caught += 1,
                GameEvent::Missed { .. } => missed += 1,
                _ => {}
            }
        }

        canvas.clear();
        game.render(&mut canvas);

        if frame > 0 && frame % (fps as u64 * 5) == 0 {
            let hud: Vec<&str> = canvas.texts().collect();
            log::info!("[{:>5.1}s] {}", frame as f32 * dt, hud.join("  "));
        }
    }

    let (loader, state) = game.shutdown();
    if !loader.bad_releases.is_empty() || loader.live_count() > 0 {
        log::warn!(
            "Texture leak: {} live, {} bad releases",
            loader.live_count(),
            loader.bad_releases.len()
        );
    }
    println!(
        "Caught {} / missed {} bombs. Final score {}, high score {}",
        caught, missed, state.score, state.high_score
    );
    Ok(())
}
