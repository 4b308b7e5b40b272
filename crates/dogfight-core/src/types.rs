//! Fundamental geometric and kinematic types.

use serde::{Deserialize, Serialize};

/// Normalize degrees into [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

/// Degrees to radians, exact (`deg * PI / 180`).
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Radians to degrees, exact (`rad * 180 / PI`).
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// Signed shortest angular difference from `source` to `target`, in degrees.
/// Negative means the target lies to the left, positive to the right.
/// The result is `mod(target - source + 180, 360) - 180`, i.e. [-180, 180).
pub fn diff_deg(source: f64, target: f64) -> f64 {
    normalize_deg(target - source + 180.0) - 180.0
}

/// 2D displacement in world units. Value type — arithmetic returns new vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const NULL: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn plus(&self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    pub fn minus(&self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn reverse(&self) -> Vector {
        Vector::new(-self.x, -self.y)
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn scalar_product(a: Vector, b: Vector) -> f64 {
        a.x * b.x + a.y * b.y
    }

    /// Unsigned angle between two vectors, in degrees.
    pub fn deg_with(&self, other: Vector) -> f64 {
        let cos = Vector::scalar_product(*self, other) / (self.norm() * other.norm());
        rad_to_deg(cos.clamp(-1.0, 1.0).acos())
    }
}

/// Absolute point in world space. Distinct from `Vector`: positions are
/// translated in place by displacements and never added to one another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `a` to `b`.
    pub fn vector_between(a: Position, b: Position) -> Vector {
        Vector::new(b.x - a.x, b.y - a.y)
    }

    /// Translate this position in place.
    pub fn move_by(&mut self, vector: Vector) {
        self.x += vector.x;
        self.y += vector.y;
    }

    /// This point's offset from the world origin, as a vector.
    pub fn to_vector(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        Position::vector_between(*self, *other).norm()
    }
}

/// Heading angle carrying both representations. Degree-constructed angles
/// are normalized into [0, 360); see `AngleTable` for the radian caveat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    deg: f64,
    rad: f64,
}

impl Angle {
    /// Construct from degrees, normalized into [0, 360).
    pub fn from_deg(deg: f64) -> Self {
        let deg = normalize_deg(deg);
        Self {
            deg,
            rad: deg_to_rad(deg),
        }
    }

    pub fn deg(&self) -> f64 {
        self.deg
    }

    pub fn rad(&self) -> f64 {
        self.rad
    }

    pub fn plus(&self, other: Angle) -> Angle {
        Angle::from_deg(self.deg + other.deg)
    }

    pub fn minus(&self, other: Angle) -> Angle {
        Angle::from_deg(self.deg - other.deg)
    }

    pub fn reverse(&self) -> Angle {
        Angle::from_deg(-self.deg)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle::from_deg(0.0)
    }
}

/// Interned lookup for integer-degree angles, built once at engine startup
/// and immutable for the engine's lifetime.
///
/// The degree and radian paths are independent: `from_rad` derives its
/// degree representation directly and does NOT normalize, so callers must
/// not expect a radian lookup to match the degree entry for the same
/// logical angle.
#[derive(Debug, Clone)]
pub struct AngleTable {
    by_deg: Vec<Angle>,
}

impl AngleTable {
    pub fn new() -> Self {
        Self {
            by_deg: (0..360).map(|d| Angle::from_deg(d as f64)).collect(),
        }
    }

    /// Lookup by degrees, normalized into [0, 360). Integer degrees return
    /// the interned entry; fractional degrees are computed on the fly.
    pub fn from_deg(&self, deg: f64) -> Angle {
        let deg = normalize_deg(deg);
        if deg.fract() == 0.0 {
            self.by_deg[(deg as usize) % 360]
        } else {
            Angle::from_deg(deg)
        }
    }

    /// Lookup by radians. The degree representation is derived and left
    /// unnormalized.
    pub fn from_rad(&self, rad: f64) -> Angle {
        Angle {
            deg: rad_to_deg(rad),
            rad,
        }
    }
}

impl Default for AngleTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Scalar speed (world units per frame) plus heading. The displacement
/// vector is cached and recomputed whenever either component changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    value: f64,
    angle: Angle,
    vector: Vector,
}

impl Speed {
    pub fn new(value: f64, angle: Angle) -> Self {
        let mut speed = Self {
            value,
            angle,
            vector: Vector::NULL,
        };
        speed.compute_vector();
        speed
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn vector(&self) -> Vector {
        self.vector
    }

    pub fn change_value(&mut self, value: f64) {
        self.value = value;
        self.compute_vector();
    }

    pub fn change_angle(&mut self, angle: Angle) {
        self.angle = angle;
        self.compute_vector();
    }

    fn compute_vector(&mut self) {
        self.vector = Vector::new(
            self.angle.rad().cos() * self.value,
            self.angle.rad().sin() * self.value,
        );
    }
}

/// Bounding size with half-extents (`floor(dim / 2)`) and area precomputed
/// at construction. Immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
    pub half_width: f64,
    pub half_height: f64,
    area: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            half_width: (width / 2.0).floor(),
            half_height: (height / 2.0).floor(),
            area: width * height,
        }
    }

    pub fn area(&self) -> f64 {
        self.area
    }
}

/// Simulation time tracking. Frame cadence is host-driven, so elapsed
/// wall-clock seconds, not the frame count, is authoritative for durations.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Completed frame count.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` elapsed seconds.
    pub fn advance(&mut self, dt: f64) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}
