//! Simulation constants and tuning parameters.
//!
//! Speeds are world units per frame; rates and durations are wall-clock
//! seconds (the frame cadence is host-driven and may jitter).

/// Nominal frame rate the driver targets (Hz).
pub const FRAME_RATE: u32 = 60;

// --- Player tuning ---

/// Minimum player speed (units per frame).
pub const PLAYER_MIN_SPEED: f64 = 4.5;

/// Maximum player speed (units per frame).
pub const PLAYER_MAX_SPEED: f64 = 5.5;

/// Player speed at spawn.
pub const PLAYER_DEFAULT_SPEED: f64 = 5.0;

/// Throttle change per frame while Up/Down is held.
pub const PLAYER_THROTTLE_STEP: f64 = 0.05;

/// Minimum interval between player shots (seconds).
pub const PLAYER_FIRE_RATE_SECS: f64 = 0.2;

/// Minimum interval between player turn increments (seconds).
pub const PLAYER_TURN_RATE_SECS: f64 = 0.01;

/// Player hit points, restored at every wave start.
pub const PLAYER_LIFE: u32 = 3;

// --- Opponent tuning ---

/// Opponent speed (units per frame).
pub const OPPONENT_SPEED: f64 = 5.0;

/// Minimum interval between opponent shots (seconds).
pub const OPPONENT_FIRE_RATE_SECS: f64 = 0.2;

/// Minimum interval between opponent turn increments (seconds).
pub const OPPONENT_TURN_RATE_SECS: f64 = 0.02;

/// Opponent hit points.
pub const OPPONENT_LIFE: u32 = 1;

// --- Planes ---

/// Plane bounding box (all planes share one airframe size).
pub const PLANE_WIDTH: f64 = 50.0;
pub const PLANE_HEIGHT: f64 = 28.0;

/// Heading change per turn increment (degrees).
pub const TURN_STEP_DEG: f64 = 1.0;

// --- Bullets ---

/// Bullet speed (units per frame).
pub const BULLET_SPEED: f64 = 20.0;

/// Updates a bullet survives before expiring.
pub const BULLET_RANGE: u32 = 200;

/// Bullet hit points.
pub const BULLET_LIFE: u32 = 1;

/// Bullet bounding box.
pub const BULLET_WIDTH: f64 = 15.0;
pub const BULLET_HEIGHT: f64 = 2.0;

/// Displacement steps between a plane and its muzzle, so a fresh shot
/// clears the shooter's own bounding box.
pub const BULLET_MUZZLE_STEPS: u32 = 8;

// --- Clouds ---

pub const CLOUD_WIDTH: f64 = 400.0;
pub const CLOUD_HEIGHT: f64 = 400.0;

/// Distance from the player beyond which a cloud despawns.
pub const CLOUD_DESPAWN_RANGE: f64 = 1200.0;

/// The cloud registry is topped back up to this count every frame.
pub const CLOUD_FLOOR: usize = 10;

/// Number of cloud sprite variants.
pub const CLOUD_VARIANTS: u8 = 3;

// --- Effects ---

pub const EXPLOSION_WIDTH: f64 = 115.0;
pub const EXPLOSION_HEIGHT: f64 = 100.0;

/// Seconds an explosion stays visible.
pub const EXPLOSION_DURATION_SECS: f64 = 0.15;

pub const SMOKE_WIDTH: f64 = 6.0;
pub const SMOKE_HEIGHT: f64 = 6.0;

/// Seconds a smoke puff stays visible.
pub const SMOKE_DURATION_SECS: f64 = 3.0;

// --- Waves ---

/// Distance from the player at which wave opponents spawn.
pub const WAVE_SPAWN_RADIUS: f64 = 300.0;

/// Seconds a transient message stays on screen.
pub const MESSAGE_DURATION_SECS: f64 = 1.5;

/// Message shown when the player dies. Persistent, no auto-clear.
pub const GAME_OVER_MESSAGE: &str = "Game Over!!!";

// --- Opponent AI ---

/// Local-frame radius inside which another opponent triggers avoidance.
pub const AVOID_RADIUS: f64 = 200.0;

/// Bearing cone (degrees) inside which a friendly blocks the shot.
pub const FRIENDLY_FIRE_CONE_DEG: f64 = 2.0;

/// Pursuit steering dead-zone (degrees) preventing oscillation.
pub const STEER_DEADZONE_DEG: f64 = 2.0;

/// Bearing cone (degrees) inside which an opponent fires.
pub const FIRE_CONE_DEG: f64 = 0.5;

// --- Radar / HUD ---

/// Radar widget radius (screen units).
pub const RADAR_RADIUS: f64 = 50.0;

/// World-to-radar distance scale.
pub const RADAR_RATIO: f64 = 15.0;
