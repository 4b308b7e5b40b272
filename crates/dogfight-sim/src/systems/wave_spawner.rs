//! Wave spawning system — refills the sky when the last opponent falls.
//!
//! Wave N puts N opponents on a circle of fixed radius around the player,
//! at `floor(360 / N)`-degree increments starting from 0°. For N that does
//! not divide 360 the spacing is the floor-divided approximation, so later
//! opponents accumulate a systematic angular gap — long-standing observable
//! behavior, kept as is.

use dogfight_core::constants::*;
use dogfight_core::entities::Plane;
use dogfight_core::types::{AngleTable, Position, Speed};

use crate::engine::Message;
use crate::world_setup;

/// Spawn the next wave if the opponent registry is empty. Resets the
/// player's life and announces the wave number.
pub fn run(
    opponents: &mut Vec<Plane>,
    player: &mut Plane,
    wave: &mut u32,
    message: &mut Message,
    angles: &AngleTable,
) {
    if !opponents.is_empty() {
        return;
    }

    player.life = PLAYER_LIFE;
    *wave += 1;
    message.show(format!("Wave: {wave}"));
    log::info!("spawning wave {wave}: {wave} opponents at radius {WAVE_SPAWN_RADIUS}");

    let base_deg = (360 / *wave) as f64;
    let mut generator = Speed::new(WAVE_SPAWN_RADIUS, angles.from_deg(0.0));
    for i in 0..*wave {
        generator.change_angle(angles.from_deg(i as f64 * base_deg));
        let position = Position::new(
            player.position.x + generator.vector().x,
            player.position.y + generator.vector().y,
        );
        opponents.push(world_setup::spawn_opponent(position, angles));
    }
}
