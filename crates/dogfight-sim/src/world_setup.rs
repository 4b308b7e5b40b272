//! Entity spawn factories.
//!
//! Creates the player, wave opponents, bullets, clouds, and effects with
//! their tuning constants applied. Registry placement is the engine's job.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use dogfight_core::constants::*;
use dogfight_core::entities::{Bullet, Cloud, Explosion, Plane, Smoke};
use dogfight_core::types::{AngleTable, Position, Size, Speed};

/// Spawn the player at the world origin, heading 0°.
pub fn spawn_player(angles: &AngleTable) -> Plane {
    Plane::new(
        Position::new(0.0, 0.0),
        Speed::new(PLAYER_DEFAULT_SPEED, angles.from_deg(0.0)),
        PLAYER_LIFE,
        PLAYER_FIRE_RATE_SECS,
        PLAYER_TURN_RATE_SECS,
    )
}

/// Spawn an opponent at a wave position, heading 0°.
pub fn spawn_opponent(position: Position, angles: &AngleTable) -> Plane {
    Plane::new(
        position,
        Speed::new(OPPONENT_SPEED, angles.from_deg(0.0)),
        OPPONENT_LIFE,
        OPPONENT_FIRE_RATE_SECS,
        OPPONENT_TURN_RATE_SECS,
    )
}

/// Spawn a bullet at the shooter's muzzle, along its heading.
pub fn spawn_bullet(shooter: &Plane) -> Bullet {
    Bullet::new(shooter.muzzle_position(), shooter.speed.angle())
}

/// Spawn one smoke puff at the emitter's position, along its heading.
pub fn spawn_smoke(emitter: &Plane) -> Smoke {
    Smoke::new(emitter.position, emitter.speed.angle())
}

pub fn spawn_explosion(position: Position) -> Explosion {
    Explosion::new(position)
}

/// Spawn a cloud just off a random screen edge relative to the player, so
/// it scrolls into view. Offsets along the edge are floor-quantized.
pub fn spawn_cloud(player_position: Position, screen: &Size, rng: &mut ChaCha8Rng) -> Cloud {
    let cloud_size = Size::new(CLOUD_WIDTH, CLOUD_HEIGHT);
    let mut position = player_position;

    match rng.gen_range(0..4u8) {
        0 => {
            position.x += screen.half_width + cloud_size.width;
            position.y += rng.gen_range(0.0..screen.height).floor()
                - screen.half_height
                - cloud_size.half_height;
        }
        1 => {
            position.x -= screen.half_width + cloud_size.width;
            position.y += rng.gen_range(0.0..screen.height).floor()
                - screen.half_height
                - cloud_size.half_height;
        }
        2 => {
            position.x += rng.gen_range(0.0..screen.width).floor()
                - screen.half_width
                - cloud_size.half_width;
            position.y += screen.half_height + cloud_size.height;
        }
        _ => {
            position.x += rng.gen_range(0.0..screen.width).floor()
                - screen.half_width
                - cloud_size.half_width;
            position.y -= screen.half_height + cloud_size.height;
        }
    }

    Cloud::new(position, rng.gen_range(1..=CLOUD_VARIANTS))
}
