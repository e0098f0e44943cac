//! 2D affine transforms.
//!
//! [`AffineTransform`] is the accumulator used while laying out a node. It
//! keeps `f64` precision and composes by right-multiplication, so
//! `t.rotate(a).translate(x, y)` translates in the rotated frame, the same
//! way PDF `cm` operators stack. [`Transform2D`] is the final `f32` matrix
//! handed to the drawing backend.
//!
//! ```text
//!     | x' |   | a  c  e | | x |
//!     | y' | = | b  d  f | | y |
//!     | 1  |   | 0  0  1 | | 1 |
//! ```

use num_traits::Float;

use crate::error::LayoutError;

/// Sine/cosine magnitudes below this snap to zero in [`AffineTransform::rotation`].
const ROTATION_EPSILON: f64 = 1e-10;

/// A point in page coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Affine transform accumulator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AffineTransform {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Create a transform from its six coefficients `[a, b, c, d, e, f]`.
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity transform.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// A pure scale.
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A pure translation.
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// A counter-clockwise rotation by `theta` radians about the origin.
    ///
    /// Quarter turns are exact: a sine or cosine within `1e-10` of zero is
    /// snapped to zero and its partner to ±1.
    pub fn rotation(theta: f64) -> Self {
        let (mut sin, mut cos) = Float::sin_cos(theta);
        if Float::abs(cos) < ROTATION_EPSILON {
            cos = 0.0;
            sin = if sin > 0.0 { 1.0 } else { -1.0 };
        } else if Float::abs(sin) < ROTATION_EPSILON {
            sin = 0.0;
            cos = if cos > 0.0 { 1.0 } else { -1.0 };
        }
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Right-multiply: the result applies `other` first, then `self`.
    pub fn compose(self, other: Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Append a scale in the current frame.
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.compose(Self::scaling(sx, sy))
    }

    /// Append a rotation in the current frame.
    pub fn rotate(self, theta: f64) -> Self {
        self.compose(Self::rotation(theta))
    }

    /// Append a translation in the current frame.
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        self.compose(Self::translation(dx, dy))
    }

    /// Map a point through this transform.
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.e,
            y: self.b * p.x + self.d * p.y + self.f,
        }
    }

    /// Horizontal translation component (`e`).
    pub fn translate_x(&self) -> f64 {
        self.e
    }

    /// Vertical translation component (`f`).
    pub fn translate_y(&self) -> f64 {
        self.f
    }

    /// The six coefficients `[a, b, c, d, e, f]`, narrowed to `f32`.
    pub fn coefficients(&self) -> [f32; 6] {
        [
            self.a as f32,
            self.b as f32,
            self.c as f32,
            self.d as f32,
            self.e as f32,
            self.f as f32,
        ]
    }
}

/// Final placement matrix `[a, b, c, d, e, f]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform2D([f32; 6]);

impl Transform2D {
    /// Wrap six coefficients, rejecting NaN and infinities.
    pub fn new(coefficients: [f32; 6]) -> Result<Self, LayoutError> {
        if coefficients.iter().all(|v| v.is_finite()) {
            Ok(Self(coefficients))
        } else {
            Err(LayoutError::NonFiniteTransform)
        }
    }

    /// Coefficients in `[a, b, c, d, e, f]` order.
    pub fn coefficients(&self) -> [f32; 6] {
        self.0
    }

    pub fn a(&self) -> f32 {
        self.0[0]
    }

    pub fn b(&self) -> f32 {
        self.0[1]
    }

    pub fn c(&self) -> f32 {
        self.0[2]
    }

    pub fn d(&self) -> f32 {
        self.0[3]
    }

    pub fn e(&self) -> f32 {
        self.0[4]
    }

    pub fn f(&self) -> f32 {
        self.0[5]
    }

    /// Widen back into an accumulator.
    pub fn to_affine(&self) -> AffineTransform {
        let [a, b, c, d, e, f] = self.0.map(f64::from);
        AffineTransform::new(a, b, c, d, e, f)
    }
}

impl From<Transform2D> for [f32; 6] {
    fn from(t: Transform2D) -> Self {
        t.0
    }
}
