//! Interfaces to the host platform: rendering, input, and audio.
//!
//! The engine computes camera-space coordinates and calls these; it owns no
//! pixel, keyboard, or audio knowledge.

use std::fmt;

use crate::enums::{Color, Control, SoundId, SpriteId};
use crate::types::{Angle, Position, Size, Vector};

/// Drawing surface. Sprites draw centered on the current transform origin;
/// rects draw with their top-left corner at the origin.
pub trait Renderer {
    fn clear(&mut self);

    /// Apply a translation + rotation, run `draw`, then restore the
    /// previous transform. Restoration is guaranteed even if `draw` draws
    /// nothing.
    fn with_transform(
        &mut self,
        translation: Vector,
        rotation: Angle,
        draw: &mut dyn FnMut(&mut dyn Renderer),
    );

    fn draw_sprite(&mut self, sprite: SpriteId, size: Size);

    fn draw_rect(&mut self, size: Size, color: Color);

    /// Plot one radar contact at the current transform origin.
    fn draw_radar_dot(&mut self);

    /// Draw centered text at a raw screen position, outside any transform.
    fn draw_text(&mut self, text: &str, position: Position);
}

/// Stateless control query, no side effects.
pub trait InputSource {
    fn is_control_active(&self, control: Control) -> bool;
}

/// Failure from the host audio backend. Reported so the driver can log it;
/// never affects simulation state.
#[derive(Debug)]
pub struct AudioError(pub String);

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "audio backend error: {}", self.0)
    }
}

impl std::error::Error for AudioError {}

/// One-shot sound playback, fire-and-forget.
pub trait AudioSink {
    fn play_once(&mut self, sound: SoundId) -> Result<(), AudioError>;
}
