//! Events emitted by the simulation for the host audio layer.

use serde::{Deserialize, Serialize};

/// Audio events collected during a tick and drained by the frame driver.
/// Fire-and-forget: playback failures never reach the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A plane fired a bullet.
    ShotFired,
    /// A collision spawned an explosion.
    ExplosionSpawned,
}
