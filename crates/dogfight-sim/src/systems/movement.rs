//! Kinematic integration system.
//!
//! Applies one frame of displacement to every moving entity:
//! `position += speed.vector`. Clouds, smoke, and explosions hold still.

use dogfight_core::entities::{Bullet, Plane};

pub fn run(player: &mut Plane, opponents: &mut [Plane], bullets: &mut [Bullet]) {
    player.position.move_by(player.speed.vector());
    for opponent in opponents {
        opponent.position.move_by(opponent.speed.vector());
    }
    for bullet in bullets {
        bullet.position.move_by(bullet.speed.vector());
    }
}
