//! Opponent AI system — evaluates the steering/firing policy for each
//! opponent and applies the decisions.
//!
//! The policy itself lives in `dogfight-opponent-ai` and is pure; this
//! system builds its world view and carries out the resulting actions.

use dogfight_core::constants::{BULLET_RANGE, BULLET_SPEED};
use dogfight_core::entities::{Bullet, Plane, Smoke};
use dogfight_core::enums::Turn;
use dogfight_core::events::AudioEvent;
use dogfight_core::types::{AngleTable, Position};

use dogfight_opponent_ai::policy::{evaluate, OpponentContext};

use crate::world_setup;

pub fn run(
    opponents: &mut [Plane],
    player: &Plane,
    bullets: &mut Vec<Bullet>,
    smoke: &mut Vec<Smoke>,
    angles: &AngleTable,
    audio_events: &mut Vec<AudioEvent>,
    dt: f64,
) {
    // Positions are snapshotted up front; steering only changes headings,
    // so every opponent sees the same formation this frame.
    let positions: Vec<Position> = opponents.iter().map(|o| o.position).collect();
    let bullet_reach = BULLET_RANGE as f64 * BULLET_SPEED;

    for idx in 0..opponents.len() {
        let friends: Vec<Position> = positions
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, p)| *p)
            .collect();

        let plane = &mut opponents[idx];
        plane.advance_cooldowns(dt);

        let ctx = OpponentContext {
            position: plane.position,
            heading: plane.speed.angle(),
            can_turn: plane.turn_cooldown.ready(),
            can_fire: plane.fire_cooldown.ready(),
            player_position: player.position,
            friends: &friends,
            bullet_reach,
        };
        let decision = evaluate(&ctx);

        match decision.turn {
            Some(Turn::Left) => plane.turn_left(angles),
            Some(Turn::Right) => plane.turn_right(angles),
            None => {
                if decision.go_straight {
                    plane.go_straight();
                }
            }
        }

        if decision.fire {
            super::fire_bullet(plane, bullets, audio_events);
        }

        smoke.push(world_setup::spawn_smoke(plane));
    }
}
