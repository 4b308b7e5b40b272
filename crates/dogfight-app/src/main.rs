//! Headless demo binary: runs the simulation against the null backends.
//!
//! Usage: `dogfight [seed] [max_frames]`. With no frame cap the loop runs
//! until the opponents bring the idle player down.

use dogfight_app::game_loop::run_game_loop;
use dogfight_app::headless::{IdleInput, NullRenderer, SilentAudio};
use dogfight_sim::engine::SimConfig;
use dogfight_sim::GameEngine;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SimConfig::default().seed);
    let max_frames: Option<u64> = args.next().and_then(|s| s.parse().ok());

    let mut engine = GameEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    let mut renderer = NullRenderer;
    let mut audio = SilentAudio;

    log::info!("starting headless run with seed {seed}");
    let frames = run_game_loop(&mut engine, &mut renderer, &IdleInput, &mut audio, max_frames);

    println!(
        "ran {frames} frames, reached wave {}, {}",
        engine.wave(),
        if engine.game_over() {
            "game over"
        } else {
            "frame cap hit"
        }
    );
}
