//! Entity state for everything that flies, drifts, or burns in the world.
//!
//! Entities are plain structs sharing small composed helpers (`Cooldown`,
//! `Lifetime`) and carrying only local state transitions. Orchestration —
//! spawning, steering, collisions, pruning — lives in the sim systems.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Facing;
use crate::types::{Angle, AngleTable, Position, Size, Speed};

/// Countdown gate for rate-limited plane actions (firing, turning).
/// Wall-clock driven: `advance` burns elapsed seconds, `trigger` re-arms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    interval_secs: f64,
    remaining_secs: f64,
}

impl Cooldown {
    /// A fresh cooldown starts ready.
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval_secs,
            remaining_secs: 0.0,
        }
    }

    pub fn ready(&self) -> bool {
        self.remaining_secs <= 0.0
    }

    pub fn trigger(&mut self) {
        self.remaining_secs = self.interval_secs;
    }

    pub fn advance(&mut self, dt: f64) {
        if self.remaining_secs > 0.0 {
            self.remaining_secs -= dt;
        }
    }
}

/// Elapsed-time lifetime for short-lived effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifetime {
    age_secs: f64,
    duration_secs: f64,
}

impl Lifetime {
    pub fn new(duration_secs: f64) -> Self {
        Self {
            age_secs: 0.0,
            duration_secs,
        }
    }

    pub fn advance(&mut self, dt: f64) {
        self.age_secs += dt;
    }

    pub fn expired(&self) -> bool {
        self.age_secs > self.duration_secs
    }
}

/// A player or opponent aircraft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plane {
    pub position: Position,
    pub speed: Speed,
    pub size: Size,
    pub life: u32,
    pub fire_cooldown: Cooldown,
    pub turn_cooldown: Cooldown,
    pub facing: Facing,
    pub deleted: bool,
}

impl Plane {
    pub fn new(
        position: Position,
        speed: Speed,
        life: u32,
        fire_rate_secs: f64,
        turn_rate_secs: f64,
    ) -> Self {
        Self {
            position,
            speed,
            size: Size::new(PLANE_WIDTH, PLANE_HEIGHT),
            life,
            fire_cooldown: Cooldown::new(fire_rate_secs),
            turn_cooldown: Cooldown::new(turn_rate_secs),
            facing: Facing::Straight,
            deleted: false,
        }
    }

    pub fn advance_cooldowns(&mut self, dt: f64) {
        self.fire_cooldown.advance(dt);
        self.turn_cooldown.advance(dt);
    }

    pub fn decrease_life(&mut self, amount: u32) {
        self.life = self.life.saturating_sub(amount);
        if self.life == 0 {
            self.deleted = true;
        }
    }

    /// Turn one increment left. Callers may bypass the cooldown gate
    /// (avoidance does); the turn always re-arms it.
    pub fn turn_left(&mut self, angles: &AngleTable) {
        let angle = self.speed.angle().minus(angles.from_deg(TURN_STEP_DEG));
        self.speed.change_angle(angle);
        self.turn_cooldown.trigger();
        self.facing = Facing::Left;
    }

    /// Turn one increment right. Same cooldown contract as `turn_left`.
    pub fn turn_right(&mut self, angles: &AngleTable) {
        let angle = self.speed.angle().plus(angles.from_deg(TURN_STEP_DEG));
        self.speed.change_angle(angle);
        self.turn_cooldown.trigger();
        self.facing = Facing::Right;
    }

    pub fn go_straight(&mut self) {
        self.facing = Facing::Straight;
    }

    /// Where a bullet leaves the muzzle: the plane's position advanced
    /// several displacement steps so the shot clears its own bounding box.
    pub fn muzzle_position(&self) -> Position {
        let mut start = self.position;
        for _ in 0..BULLET_MUZZLE_STEPS {
            start.move_by(self.speed.vector());
        }
        start
    }
}

/// A bullet in flight. Expires after a fixed number of updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Position,
    pub speed: Speed,
    pub size: Size,
    pub life: u32,
    pub range: u32,
    pub deleted: bool,
}

impl Bullet {
    pub fn new(position: Position, heading: Angle) -> Self {
        Self {
            position,
            speed: Speed::new(BULLET_SPEED, heading),
            size: Size::new(BULLET_WIDTH, BULLET_HEIGHT),
            life: BULLET_LIFE,
            range: BULLET_RANGE,
            deleted: false,
        }
    }

    pub fn decrease_life(&mut self, amount: u32) {
        self.life = self.life.saturating_sub(amount);
        if self.life == 0 {
            self.deleted = true;
        }
    }

    /// Burn one update's worth of range; deletes on reaching zero.
    pub fn consume_range(&mut self) {
        self.range = self.range.saturating_sub(1);
        if self.range == 0 {
            self.deleted = true;
        }
    }
}

/// Stationary scenery. Despawns once the player flies far enough away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub position: Position,
    /// Sprite variant in 1..=3.
    pub variant: u8,
    pub size: Size,
    pub deleted: bool,
}

impl Cloud {
    pub fn new(position: Position, variant: u8) -> Self {
        Self {
            position,
            variant,
            size: Size::new(CLOUD_WIDTH, CLOUD_HEIGHT),
            deleted: false,
        }
    }
}

/// Stationary blast effect, auto-deleting on expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub position: Position,
    pub size: Size,
    pub lifetime: Lifetime,
    pub deleted: bool,
}

impl Explosion {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            size: Size::new(EXPLOSION_WIDTH, EXPLOSION_HEIGHT),
            lifetime: Lifetime::new(EXPLOSION_DURATION_SECS),
            deleted: false,
        }
    }
}

/// One puff of a plane's smoke trail, oriented along the emitter's heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Smoke {
    pub position: Position,
    pub heading: Angle,
    pub size: Size,
    pub lifetime: Lifetime,
    pub deleted: bool,
}

impl Smoke {
    pub fn new(position: Position, heading: Angle) -> Self {
        Self {
            position,
            heading,
            size: Size::new(SMOKE_WIDTH, SMOKE_HEIGHT),
            lifetime: Lifetime::new(SMOKE_DURATION_SECS),
            deleted: false,
        }
    }
}
