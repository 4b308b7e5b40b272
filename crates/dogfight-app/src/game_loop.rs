//! Frame driver — runs the engine at a nominal cadence and wires its
//! output to the host backends.
//!
//! The loop computes real elapsed time per frame and hands it to the
//! engine, so durations stay correct however much the host cadence
//! jitters. The engine signals termination through its game-over flag.

use std::time::{Duration, Instant};

use dogfight_core::constants::FRAME_RATE;
use dogfight_core::enums::SoundId;
use dogfight_core::events::AudioEvent;
use dogfight_core::io::{AudioSink, InputSource, Renderer};
use dogfight_sim::GameEngine;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Run the game loop until game over, or until `max_frames` elapses when
/// one is given. Returns the number of frames driven.
pub fn run_game_loop(
    engine: &mut GameEngine,
    renderer: &mut dyn Renderer,
    input: &dyn InputSource,
    audio: &mut dyn AudioSink,
    max_frames: Option<u64>,
) -> u64 {
    let mut frames = 0;
    let mut next_frame_time = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        // 1. Advance one frame with the real elapsed time.
        let now = Instant::now();
        let dt = (now - last_tick).as_secs_f64();
        last_tick = now;
        let events = engine.tick(input, dt);
        frames += 1;

        // 2. Hand audio events to the sink; playback failures are logged
        //    and swallowed, never fed back into the simulation.
        for event in events {
            let sound = sound_for(event);
            if let Err(err) = audio.play_once(sound) {
                log::warn!("audio playback failed: {err}");
            }
        }

        // 3. Draw the resulting state (including the final game-over frame).
        engine.render(renderer);

        if engine.game_over() {
            log::info!("game over after {frames} frames on wave {}", engine.wave());
            return frames;
        }
        if let Some(max) = max_frames {
            if frames >= max {
                return frames;
            }
        }

        // 4. Sleep until the next frame boundary.
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Fell more than two frames behind; restart the schedule
            // instead of spiraling on catch-up.
            next_frame_time = now;
        }
    }
}

/// Map an engine audio event to the host sound it triggers.
fn sound_for(event: AudioEvent) -> SoundId {
    match event {
        AudioEvent::ShotFired => SoundId::Shot,
        AudioEvent::ExplosionSpawned => SoundId::Explosion,
    }
}
