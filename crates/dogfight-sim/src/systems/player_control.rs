//! Player control system — reads the host input source and applies
//! turn/throttle/fire, then refreshes the camera basis to follow the
//! player's position and heading.

use dogfight_core::basis::BasisTransformation;
use dogfight_core::constants::*;
use dogfight_core::entities::{Bullet, Plane, Smoke};
use dogfight_core::enums::Control;
use dogfight_core::events::AudioEvent;
use dogfight_core::io::InputSource;
use dogfight_core::types::AngleTable;

use crate::world_setup;

#[allow(clippy::too_many_arguments)]
pub fn run(
    player: &mut Plane,
    camera: &mut BasisTransformation,
    input: &dyn InputSource,
    bullets: &mut Vec<Bullet>,
    smoke: &mut Vec<Smoke>,
    angles: &AngleTable,
    audio_events: &mut Vec<AudioEvent>,
    dt: f64,
) {
    player.advance_cooldowns(dt);

    if player.turn_cooldown.ready() && input.is_control_active(Control::Left) {
        player.turn_left(angles);
    } else if player.turn_cooldown.ready() && input.is_control_active(Control::Right) {
        player.turn_right(angles);
    } else {
        player.go_straight();
    }

    let value = player.speed.value();
    if value + PLAYER_THROTTLE_STEP <= PLAYER_MAX_SPEED && input.is_control_active(Control::Up) {
        player.speed.change_value(value + PLAYER_THROTTLE_STEP);
    } else if value - PLAYER_THROTTLE_STEP >= PLAYER_MIN_SPEED
        && input.is_control_active(Control::Down)
    {
        player.speed.change_value(value - PLAYER_THROTTLE_STEP);
    }

    if player.fire_cooldown.ready() && input.is_control_active(Control::Fire) {
        super::fire_bullet(player, bullets, audio_events);
    }

    smoke.push(world_setup::spawn_smoke(player));

    camera.set_translation(player.position.to_vector());
    camera.set_rotation(player.speed.angle());
}
