//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player controls the engine may query from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

/// Which way a plane is banking — selects the sprite variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Straight,
    Left,
    Right,
}

/// One steering increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

/// Sprites the renderer knows how to blit. Drawn centered on the current
/// transform origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    Player { facing: Facing },
    Opponent { facing: Facing },
    /// Variant in 1..=3.
    Cloud { variant: u8 },
    Explosion,
    Smoke,
    RadarScreen,
}

/// Flat colors for primitive fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
    Yellow,
    OrangeRed,
    Grey,
}

/// Sounds the host audio sink can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundId {
    Shot,
    Explosion,
}

/// Top-level game phase. GameOver is terminal: the engine refuses further
/// updates and the driver stops scheduling ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    GameOver,
}
