//! Game engine — entity registries, frame pipeline, draw entry point.
//!
//! `GameEngine` owns the single player plane, the per-category entity
//! registries, the camera basis, and the injected `AngleTable`. Each call
//! to `tick` runs one frame of the update pipeline to completion; `render`
//! walks the resulting snapshot through the host `Renderer`.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dogfight_core::basis::BasisTransformation;
use dogfight_core::constants::*;
use dogfight_core::entities::{Bullet, Cloud, Explosion, Plane, Smoke};
use dogfight_core::enums::GamePhase;
use dogfight_core::events::AudioEvent;
use dogfight_core::io::{InputSource, Renderer};
use dogfight_core::types::{AngleTable, SimTime, Size};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new game.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same game.
    pub seed: u64,
    /// Screen width in world units (the camera view is 1:1).
    pub screen_width: f64,
    /// Screen height in world units.
    pub screen_height: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            screen_width: 1024.0,
            screen_height: 768.0,
        }
    }
}

/// Transient on-screen message with an optional auto-clear timer.
#[derive(Debug, Clone, Default)]
pub struct Message {
    text: String,
    ttl_secs: Option<f64>,
}

impl Message {
    /// Show a message that auto-clears after the standard duration.
    pub fn show(&mut self, text: String) {
        self.text = text;
        self.ttl_secs = Some(MESSAGE_DURATION_SECS);
    }

    /// Show a message with no timer. It stays until replaced.
    pub fn show_final(&mut self, text: &str) {
        self.text = text.to_owned();
        self.ttl_secs = None;
    }

    pub fn advance(&mut self, dt: f64) {
        if let Some(ttl) = &mut self.ttl_secs {
            *ttl -= dt;
            if *ttl <= 0.0 {
                self.text.clear();
                self.ttl_secs = None;
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The game engine. Owns all entity state.
pub struct GameEngine {
    pub(crate) angles: AngleTable,
    pub(crate) camera: BasisTransformation,
    pub(crate) screen: Size,
    pub(crate) player: Plane,
    pub(crate) opponents: Vec<Plane>,
    pub(crate) bullets: Vec<Bullet>,
    pub(crate) clouds: Vec<Cloud>,
    pub(crate) explosions: Vec<Explosion>,
    pub(crate) smoke: Vec<Smoke>,
    pub(crate) wave: u32,
    pub(crate) message: Message,
    pub(crate) phase: GamePhase,
    pub(crate) time: SimTime,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) audio_events: Vec<AudioEvent>,
}

impl GameEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let angles = AngleTable::new();
        let player = world_setup::spawn_player(&angles);

        let mut camera = BasisTransformation::new();
        camera.set_translation(player.position.to_vector());
        camera.set_rotation(player.speed.angle());

        Self {
            angles,
            camera,
            screen: Size::new(config.screen_width, config.screen_height),
            player,
            opponents: Vec::new(),
            bullets: Vec::new(),
            clouds: Vec::new(),
            explosions: Vec::new(),
            smoke: Vec::new(),
            wave: 0,
            message: Message::default(),
            phase: GamePhase::Running,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            audio_events: Vec::new(),
        }
    }

    /// Advance the simulation by one frame of `dt` elapsed wall-clock
    /// seconds and return the audio events it produced.
    ///
    /// Displacement and bullet range are per-frame quantities; every
    /// duration (cooldowns, effect expiry, message clearing) is driven by
    /// `dt`, so the engine tolerates whatever cadence the host delivers.
    /// Once the phase is GameOver this is a no-op.
    pub fn tick(&mut self, input: &dyn InputSource, dt: f64) -> Vec<AudioEvent> {
        if self.phase == GamePhase::GameOver {
            return Vec::new();
        }

        self.time.advance(dt);
        self.message.advance(dt);

        systems::wave_spawner::run(
            &mut self.opponents,
            &mut self.player,
            &mut self.wave,
            &mut self.message,
            &self.angles,
        );
        systems::clouds::run(
            &mut self.clouds,
            self.player.position,
            &self.screen,
            &mut self.rng,
        );
        systems::movement::run(&mut self.player, &mut self.opponents, &mut self.bullets);
        systems::player_control::run(
            &mut self.player,
            &mut self.camera,
            input,
            &mut self.bullets,
            &mut self.smoke,
            &self.angles,
            &mut self.audio_events,
            dt,
        );
        systems::opponent_ai::run(
            &mut self.opponents,
            &self.player,
            &mut self.bullets,
            &mut self.smoke,
            &self.angles,
            &mut self.audio_events,
            dt,
        );
        systems::lifecycle::run(
            &mut self.bullets,
            &mut self.clouds,
            &mut self.explosions,
            &mut self.smoke,
            self.player.position,
            dt,
        );
        systems::collision::run(
            &mut self.opponents,
            &mut self.player,
            &mut self.bullets,
            &mut self.explosions,
            &mut self.audio_events,
        );
        systems::cleanup::run(
            &mut self.opponents,
            &mut self.bullets,
            &mut self.clouds,
            &mut self.explosions,
            &mut self.smoke,
        );

        if self.player.deleted {
            self.phase = GamePhase::GameOver;
            self.message.show_final(GAME_OVER_MESSAGE);
            log::info!("player down on wave {}, game over", self.wave);
        }

        std::mem::take(&mut self.audio_events)
    }

    /// Draw the current state through the host renderer. Read-only.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        systems::render::run(self, renderer);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Terminal flag read by the frame scheduler to stop further ticks.
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn message(&self) -> &str {
        self.message.text()
    }

    pub fn player(&self) -> &Plane {
        &self.player
    }

    pub fn opponents(&self) -> &[Plane] {
        &self.opponents
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn smoke(&self) -> &[Smoke] {
        &self.smoke
    }
}
