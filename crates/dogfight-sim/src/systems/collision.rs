//! Collision system — pairwise axis-aligned bounding-box checks over the
//! solid entities: all opponents, the player, all bullets (in that order).
//!
//! Damage is applied immediately but deletion is deferred to the cleanup
//! pass (flag only), so a mid-scan death never disturbs the remaining
//! pairwise checks.

use dogfight_core::entities::{Bullet, Explosion, Plane};
use dogfight_core::events::AudioEvent;
use dogfight_core::types::{Position, Size};

use crate::world_setup;

/// Which registry a collision candidate lives in.
#[derive(Debug, Clone, Copy)]
enum Candidate {
    Opponent(usize),
    Player,
    Bullet(usize),
}

/// AABB overlap test on half-extents. Not colliding if any separating-axis
/// condition holds. Symmetric; self-pairs are excluded by the scan itself.
pub fn colliding(a_pos: Position, a_size: Size, b_pos: Position, b_size: Size) -> bool {
    !(a_pos.x + a_size.half_width < b_pos.x - b_size.half_width
        || a_pos.y + a_size.half_height < b_pos.y - b_size.half_height
        || a_pos.x - a_size.half_width > b_pos.x + b_size.half_width
        || a_pos.y - a_size.half_height > b_pos.y + b_size.half_height)
}

/// Resolve every colliding pair: 1 damage to each participant, and one
/// explosion at the position of the strictly-larger-area participant (ties
/// go to the second operand).
pub fn run(
    opponents: &mut [Plane],
    player: &mut Plane,
    bullets: &mut [Bullet],
    explosions: &mut Vec<Explosion>,
    audio_events: &mut Vec<AudioEvent>,
) {
    let mut candidates: Vec<(Candidate, Position, Size)> =
        Vec::with_capacity(opponents.len() + 1 + bullets.len());
    for (i, opponent) in opponents.iter().enumerate() {
        candidates.push((Candidate::Opponent(i), opponent.position, opponent.size));
    }
    candidates.push((Candidate::Player, player.position, player.size));
    for (i, bullet) in bullets.iter().enumerate() {
        candidates.push((Candidate::Bullet(i), bullet.position, bullet.size));
    }

    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            let (ref_a, pos_a, size_a) = candidates[i];
            let (ref_b, pos_b, size_b) = candidates[j];
            if !colliding(pos_a, size_a, pos_b, size_b) {
                continue;
            }

            apply_damage(ref_a, opponents, player, bullets);
            apply_damage(ref_b, opponents, player, bullets);

            let explosion_at = if size_a.area() > size_b.area() {
                pos_a
            } else {
                pos_b
            };
            explosions.push(world_setup::spawn_explosion(explosion_at));
            audio_events.push(AudioEvent::ExplosionSpawned);
        }
    }
}

fn apply_damage(
    candidate: Candidate,
    opponents: &mut [Plane],
    player: &mut Plane,
    bullets: &mut [Bullet],
) {
    match candidate {
        Candidate::Opponent(i) => opponents[i].decrease_life(1),
        Candidate::Player => player.decrease_life(1),
        Candidate::Bullet(i) => bullets[i].decrease_life(1),
    }
}
