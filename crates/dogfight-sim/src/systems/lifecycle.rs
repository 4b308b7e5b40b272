//! Lifecycle system — per-kind rules that run after displacement:
//! bullets burn range, clouds despawn far from the player, explosions and
//! smoke expire on their wall-clock lifetimes.

use dogfight_core::constants::CLOUD_DESPAWN_RANGE;
use dogfight_core::entities::{Bullet, Cloud, Explosion, Smoke};
use dogfight_core::types::Position;

pub fn run(
    bullets: &mut [Bullet],
    clouds: &mut [Cloud],
    explosions: &mut [Explosion],
    smoke: &mut [Smoke],
    player_position: Position,
    dt: f64,
) {
    for bullet in bullets {
        bullet.consume_range();
    }

    for cloud in clouds {
        if cloud.position.distance_to(&player_position) > CLOUD_DESPAWN_RANGE {
            cloud.deleted = true;
        }
    }

    for explosion in explosions {
        explosion.lifetime.advance(dt);
        if explosion.lifetime.expired() {
            explosion.deleted = true;
        }
    }

    for puff in smoke {
        puff.lifetime.advance(dt);
        if puff.lifetime.expired() {
            puff.deleted = true;
        }
    }
}
