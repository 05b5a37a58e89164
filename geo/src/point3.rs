use std::ops::{Add, AddAssign, Index, Neg, Sub, SubAssign};

use crate::{Axis, Coord3, Scalar, Vector3};

/// An affine location in 3D space.
///
/// Subtracting two points yields a [`Vector3`]; adding a vector to a point
/// yields another point. `point + point` is deliberately not defined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Point3 { x, y, z }
    }

    pub fn origin() -> Self {
        Point3::new(T::zero(), T::zero(), T::zero())
    }
}

impl<T> From<Coord3<T>> for Point3<T> {
    fn from(c: Coord3<T>) -> Self {
        Point3 {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl<T> From<Point3<T>> for Coord3<T> {
    fn from(p: Point3<T>) -> Self {
        Coord3 {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Vector3<T>;

    fn sub(self, p: Point3<T>) -> Vector3<T> {
        Vector3::new(self.x - p.x, self.y - p.y, self.z - p.z)
    }
}

impl<T: Scalar> Add<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;

    fn add(self, v: Vector3<T>) -> Point3<T> {
        Point3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T: Scalar> Sub<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;

    fn sub(self, v: Vector3<T>) -> Point3<T> {
        Point3::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T: Scalar> AddAssign<Vector3<T>> for Point3<T> {
    fn add_assign(&mut self, v: Vector3<T>) {
        *self = *self + v;
    }
}

impl<T: Scalar> SubAssign<Vector3<T>> for Point3<T> {
    fn sub_assign(&mut self, v: Vector3<T>) {
        *self = *self - v;
    }
}

impl<T: Scalar> Neg for Point3<T> {
    type Output = Point3<T>;

    fn neg(self) -> Point3<T> {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl<T> Index<Axis> for Point3<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}
