//! Cleanup system — compacts every registry down to live entities.
//!
//! Second half of the two-phase deletion: systems only flag `deleted`,
//! this pass prunes. The player is not registry-owned; the engine turns
//! its deleted flag into the game-over transition instead.

use dogfight_core::entities::{Bullet, Cloud, Explosion, Plane, Smoke};

pub fn run(
    opponents: &mut Vec<Plane>,
    bullets: &mut Vec<Bullet>,
    clouds: &mut Vec<Cloud>,
    explosions: &mut Vec<Explosion>,
    smoke: &mut Vec<Smoke>,
) {
    opponents.retain(|o| !o.deleted);
    bullets.retain(|b| !b.deleted);
    clouds.retain(|c| !c.deleted);
    explosions.retain(|e| !e.deleted);
    smoke.retain(|s| !s.deleted);
}
