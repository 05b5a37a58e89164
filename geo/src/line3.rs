use crate::{Interval, Point3, Scalar, Vector3};

/// A parametric 3D line: origin, direction and a parameter-range gate.
///
/// Points on the line are `origin + t * direction`; a parameter only counts
/// as a hit when `limits.inside(t)` holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3<T> {
    origin: Point3<T>,
    direction: Vector3<T>,
    limits: Interval<T>,
    infinite: bool,
}

impl<T: Scalar> Line3<T> {
    /// A line with the full representable parameter range.
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        Line3 {
            origin,
            direction,
            limits: Interval::new(-T::max_value(), T::max_value()),
            infinite: true,
        }
    }

    pub fn with_limits(origin: Point3<T>, direction: Vector3<T>, limits: Interval<T>) -> Self {
        let infinite =
            limits.begin() <= -T::max_value() && limits.end() >= T::max_value();

        Line3 {
            origin,
            direction,
            limits,
            infinite,
        }
    }

    /// The segment between two points: direction is `p2 - p1` and the
    /// parameter range is the open unit interval.
    pub fn between(p1: Point3<T>, p2: Point3<T>) -> Self {
        Line3::with_limits(
            p1,
            p2 - p1,
            Interval::new(T::tolerance(), T::one() - T::epsilon()),
        )
    }

    pub fn origin(&self) -> Point3<T> {
        self.origin
    }

    pub fn direction(&self) -> Vector3<T> {
        self.direction
    }

    pub fn limits(&self) -> Interval<T> {
        self.limits
    }

    pub fn infinite(&self) -> bool {
        self.infinite
    }

    pub fn inside(&self, t: T) -> bool {
        self.limits.inside(t)
    }

    pub fn point_at(&self, t: T) -> Point3<T> {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at() {
        let l = Line3::new(Point3::origin(), Vector3::new(0.0, 1.0, 0.0));

        assert_eq!(l.point_at(0.0), l.origin());
        assert_eq!(l.point_at(2.5), Point3::new(0.0, 2.5, 0.0));
        assert!(l.infinite());
    }

    #[test]
    fn test_limits_gate() {
        let l = Line3::with_limits(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Interval::new(0.0, 10.0),
        );

        assert!(l.inside(5.0));
        assert!(!l.inside(0.0));
        assert!(!l.inside(11.0));
        assert!(!l.infinite());
    }

    #[test]
    fn test_between() {
        let l = Line3::between(Point3::origin(), Point3::new(2.0, 0.0, 0.0));

        assert_eq!(l.direction(), Vector3::new(2.0, 0.0, 0.0));
        assert!(l.inside(0.5));
        assert!(!l.inside(1.0));
    }
}
