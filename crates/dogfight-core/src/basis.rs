//! Local-frame transforms: a translation plus rotation defining an
//! entity-local or camera-local coordinate frame.

use serde::{Deserialize, Serialize};

use crate::types::{Angle, Position, Vector};

/// Polar coordinates in a local frame: radius and angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarCoord {
    pub radius: f64,
    pub theta: f64,
}

/// A translated + rotated frame. The reversed translation and rotation are
/// kept precomputed so inverse transforms never recompute them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisTransformation {
    translation: Vector,
    r_translation: Vector,
    rotation: Angle,
    r_rotation: Angle,
}

impl BasisTransformation {
    pub fn new() -> Self {
        let rotation = Angle::from_deg(0.0);
        Self {
            translation: Vector::NULL,
            r_translation: Vector::NULL,
            rotation,
            r_rotation: rotation.reverse(),
        }
    }

    pub fn set_translation(&mut self, translation: Vector) {
        self.translation = translation;
        self.r_translation = translation.reverse();
    }

    pub fn set_rotation(&mut self, rotation: Angle) {
        self.rotation = rotation;
        self.r_rotation = rotation.reverse();
    }

    pub fn translation(&self) -> Vector {
        self.translation
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    /// World position to local polar coordinates.
    pub fn to_local_polar(&self, position: Position) -> PolarCoord {
        let p = self.r_translation.plus(position.to_vector());
        PolarCoord {
            radius: p.norm(),
            theta: p.y.atan2(p.x) + self.r_rotation.rad(),
        }
    }

    /// World position to local Cartesian coordinates, for plotting in the
    /// frame.
    pub fn to_local(&self, position: Position) -> Position {
        let polar = self.to_local_polar(position);
        Position::new(
            polar.radius * polar.theta.cos(),
            polar.radius * polar.theta.sin(),
        )
    }

    /// World heading to local heading.
    pub fn to_local_angle(&self, angle: Angle) -> Angle {
        angle.plus(self.r_rotation)
    }

    /// Local polar coordinates back to a world position. Inverse of
    /// `to_local_polar`.
    pub fn to_world(&self, polar: PolarCoord) -> Position {
        let theta = polar.theta - self.r_rotation.rad();
        Position::new(
            polar.radius * theta.cos() + self.translation.x,
            polar.radius * theta.sin() + self.translation.y,
        )
    }

    /// Radius-clamped, ratio-scaled projection for the radar widget: the
    /// angle is unchanged, the radius becomes `min(max_radius, r / ratio)`.
    pub fn to_radar_space(&self, position: Position, max_radius: f64, ratio: f64) -> Position {
        let polar = self.to_local_polar(position);
        let radius = (polar.radius / ratio).min(max_radius);
        Position::new(radius * polar.theta.cos(), radius * polar.theta.sin())
    }
}

impl Default for BasisTransformation {
    fn default() -> Self {
        Self::new()
    }
}
