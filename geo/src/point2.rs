use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{Coord2, Scalar, Vector2};

/// An affine location in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    pub fn origin() -> Self {
        Point2::new(T::zero(), T::zero())
    }
}

impl<T> From<Coord2<T>> for Point2<T> {
    fn from(c: Coord2<T>) -> Self {
        Point2 { x: c.x, y: c.y }
    }
}

impl<T> From<Point2<T>> for Coord2<T> {
    fn from(p: Point2<T>) -> Self {
        Coord2 { x: p.x, y: p.y }
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Vector2<T>;

    fn sub(self, p: Point2<T>) -> Vector2<T> {
        Vector2::new(self.x - p.x, self.y - p.y)
    }
}

impl<T: Scalar> Add<Vector2<T>> for Point2<T> {
    type Output = Point2<T>;

    fn add(self, v: Vector2<T>) -> Point2<T> {
        Point2::new(self.x + v.x, self.y + v.y)
    }
}

impl<T: Scalar> Sub<Vector2<T>> for Point2<T> {
    type Output = Point2<T>;

    fn sub(self, v: Vector2<T>) -> Point2<T> {
        Point2::new(self.x - v.x, self.y - v.y)
    }
}

impl<T: Scalar> AddAssign<Vector2<T>> for Point2<T> {
    fn add_assign(&mut self, v: Vector2<T>) {
        *self = *self + v;
    }
}

impl<T: Scalar> SubAssign<Vector2<T>> for Point2<T> {
    fn sub_assign(&mut self, v: Vector2<T>) {
        *self = *self - v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affine_ops() {
        let p = Point2::new(2.0, 3.0);

        assert_eq!(p - Point2::origin(), Vector2::new(2.0, 3.0));
        assert_eq!(p + Vector2::new(-2.0, -3.0), Point2::origin());
    }
}
