//! Per-frame systems run by the engine, in pipeline order:
//! wave spawning, cloud top-up, movement, player control, opponent AI,
//! lifecycle, collision, cleanup. `render` is the read-only draw pass.
//!
//! Systems take exactly the engine state they touch — none own any.

use dogfight_core::entities::{Bullet, Plane};
use dogfight_core::events::AudioEvent;

use crate::world_setup;

pub mod cleanup;
pub mod clouds;
pub mod collision;
pub mod lifecycle;
pub mod movement;
pub mod opponent_ai;
pub mod player_control;
pub mod render;
pub mod wave_spawner;

/// Fire one bullet from `shooter`: spawn at the muzzle, re-arm the fire
/// cooldown, emit the shot sound.
pub(crate) fn fire_bullet(
    shooter: &mut Plane,
    bullets: &mut Vec<Bullet>,
    audio_events: &mut Vec<AudioEvent>,
) {
    bullets.push(world_setup::spawn_bullet(shooter));
    shooter.fire_cooldown.trigger();
    audio_events.push(AudioEvent::ShotFired);
}
