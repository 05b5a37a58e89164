pub mod coord2;
pub mod coord3;
pub mod frame;
pub mod interval;
pub mod line3;
pub mod onb;
pub mod point2;
pub mod point3;
pub mod unit_line3;
pub mod vector2;
pub mod vector3;
pub mod vector_utils;

use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Float, FromPrimitive};

pub use coord2::Coord2;
pub use coord3::Coord3;
pub use frame::Frame;
pub use interval::Interval;
pub use line3::Line3;
pub use onb::Onb;
pub use point2::Point2;
pub use point3::Point3;
pub use unit_line3::UnitLine3;
pub use vector2::Vector2;
pub use vector3::Vector3;

/// An enum over the X, Y and Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// The scalar type all the algebra is generic over.
///
/// Everything a `f32` or `f64` already provides, plus a geometric comparison
/// tolerance and a way to lift literals without going through fallible
/// conversions.
pub trait Scalar:
    Float
    + FromPrimitive
    + Debug
    + Default
    + Send
    + Sync
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// Tolerance used by geometric predicates (containment tests, parallel
    /// checks and the like).
    fn tolerance() -> Self;

    /// Lift an `f64` literal into this scalar type.
    fn of(v: f64) -> Self;
}

impl Scalar for f32 {
    fn tolerance() -> Self {
        1e-5
    }

    fn of(v: f64) -> Self {
        v as f32
    }
}

impl Scalar for f64 {
    fn tolerance() -> Self {
        1e-9
    }

    fn of(v: f64) -> Self {
        v
    }
}
