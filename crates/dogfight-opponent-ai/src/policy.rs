//! Opponent steering and firing policy.
//!
//! Builds a frame centered on the opponent's own position and heading,
//! computes the player's bearing, and decides one frame's worth of actions.
//! The sim layer feeds in a view of the world and applies the decision.

use dogfight_core::basis::BasisTransformation;
use dogfight_core::constants::*;
use dogfight_core::enums::Turn;
use dogfight_core::types::{diff_deg, rad_to_deg, Angle, Position};

/// Input to the policy for a single opponent.
pub struct OpponentContext<'a> {
    pub position: Position,
    pub heading: Angle,
    /// Turn cooldown state; gates pursuit steering, not avoidance.
    pub can_turn: bool,
    /// Fire cooldown state.
    pub can_fire: bool,
    pub player_position: Position,
    /// Positions of the other opponents, self excluded.
    pub friends: &'a [Position],
    /// How far a bullet travels before expiring (range × speed).
    pub bullet_reach: f64,
}

/// One frame's worth of actions for an opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentDecision {
    /// Turn to apply this frame. Avoidance turns bypass the turn cooldown
    /// (the turn still re-arms it).
    pub turn: Option<Turn>,
    /// Whether the turn is an avoidance maneuver.
    pub avoiding: bool,
    /// Reset the bank to straight (pursuit dead-zone, turn-gated).
    pub go_straight: bool,
    pub fire: bool,
}

/// Evaluate the policy for one opponent.
///
/// Avoidance takes priority over pursuit: the first friend inside
/// `AVOID_RADIUS` forces a turn away from it and suppresses pursuit for
/// this frame. The free-shot flag is computed across all friends — it
/// gates firing, not steering.
pub fn evaluate(ctx: &OpponentContext) -> OpponentDecision {
    let mut basis = BasisTransformation::new();
    basis.set_translation(ctx.position.to_vector());
    basis.set_rotation(ctx.heading);

    let mut avoid_turn = None;
    let mut free_shot = true;
    for friend in ctx.friends {
        let polar = basis.to_local_polar(*friend);
        let bearing = diff_deg(0.0, rad_to_deg(polar.theta));
        if avoid_turn.is_none() && polar.radius < AVOID_RADIUS {
            // Friend to the left: break right, and vice versa.
            avoid_turn = Some(if bearing < 0.0 { Turn::Right } else { Turn::Left });
        }
        if bearing.abs() < FRIENDLY_FIRE_CONE_DEG {
            free_shot = false;
        }
    }

    let player_polar = basis.to_local_polar(ctx.player_position);
    let bearing = diff_deg(0.0, rad_to_deg(player_polar.theta));

    let avoiding = avoid_turn.is_some();
    let (turn, go_straight) = if avoiding {
        (avoid_turn, false)
    } else if ctx.can_turn {
        if bearing > STEER_DEADZONE_DEG {
            (Some(Turn::Right), false)
        } else if bearing < -STEER_DEADZONE_DEG {
            (Some(Turn::Left), false)
        } else {
            (None, true)
        }
    } else {
        (None, false)
    };

    let fire = ctx.can_fire
        && free_shot
        && !avoiding
        && bearing.abs() < FIRE_CONE_DEG
        && player_polar.radius <= ctx.bullet_reach;

    OpponentDecision {
        turn,
        avoiding,
        go_straight,
        fire,
    }
}
