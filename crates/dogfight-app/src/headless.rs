//! Headless host backends: no pixels, no keys, no speakers.
//!
//! Used by the demo binary and the driver tests. `NullRenderer` still runs
//! transform closures so the draw pass executes exactly as it would
//! against a real surface.

use dogfight_core::enums::{Color, Control, SoundId, SpriteId};
use dogfight_core::io::{AudioError, AudioSink, InputSource, Renderer};
use dogfight_core::types::{Angle, Position, Size, Vector};

/// Renderer that draws nothing but honors the `with_transform` contract.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self) {}

    fn with_transform(
        &mut self,
        _translation: Vector,
        _rotation: Angle,
        draw: &mut dyn FnMut(&mut dyn Renderer),
    ) {
        draw(self);
    }

    fn draw_sprite(&mut self, _sprite: SpriteId, _size: Size) {}

    fn draw_rect(&mut self, _size: Size, _color: Color) {}

    fn draw_radar_dot(&mut self) {}

    fn draw_text(&mut self, _text: &str, _position: Position) {}
}

/// Input source with nothing pressed. The player flies straight and level.
pub struct IdleInput;

impl InputSource for IdleInput {
    fn is_control_active(&self, _control: Control) -> bool {
        false
    }
}

/// Audio sink that accepts every sound and plays none.
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_once(&mut self, _sound: SoundId) -> Result<(), AudioError> {
        Ok(())
    }
}
