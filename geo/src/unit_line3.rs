use crate::{Interval, Line3, Point3, Scalar, Vector3};

/// A parametric ray whose direction has unit length.
///
/// The length of the original, non-unit direction is cached so that the
/// parameter range can be rescaled into unit-direction space at construction
/// and unscaled again when converting back to a [`Line3`]. All distances
/// reported against a `UnitLine3` are therefore real euclidean distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitLine3<T> {
    origin: Point3<T>,
    direction: Vector3<T>,
    limits: Interval<T>,
    infinite: bool,
    length: T,
}

impl<T: Scalar> UnitLine3<T> {
    /// A forward ray: the direction is normalized and the parameter range
    /// starts at the geometric tolerance, which keeps a scattered ray from
    /// immediately re-hitting the surface it left.
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Self {
        let length = direction.length();

        UnitLine3 {
            origin,
            direction: direction / length,
            limits: Interval::new(T::tolerance(), T::max_value()),
            infinite: false,
            length,
        }
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

    /// The length the direction had before normalization.
    pub fn normal_length(&self) -> T {
        self.length
    }

    pub fn inside(&self, t: T) -> bool {
        self.limits.inside(t)
    }

    pub fn point_at(&self, t: T) -> Point3<T> {
        self.origin + self.direction * t
    }

    pub fn to_line(&self) -> Line3<T> {
        if self.infinite {
            return Line3::new(self.origin, self.direction * self.length);
        }

        Line3::with_limits(
            self.origin,
            self.direction * self.length,
            Interval::new(self.limits.begin() / self.length, self.limits.end() / self.length),
        )
    }
}

impl<T: Scalar> From<Line3<T>> for UnitLine3<T> {
    fn from(line: Line3<T>) -> Self {
        let length = line.direction().length();
        let mut limits = line.limits();

        if !line.infinite() {
            limits.set(limits.begin() * length, limits.end() * length);
        }

        UnitLine3 {
            origin: line.origin(),
            direction: line.direction() / length,
            limits,
            infinite: line.infinite(),
            length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_unit() {
        let l = UnitLine3::new(Point3::<f64>::origin(), Vector3::new(0.0, 0.0, -3.0));

        assert!((l.direction().length() - 1.0).abs() < 1e-12);
        assert_eq!(l.normal_length(), 3.0);
        assert_eq!(l.point_at(2.0), Point3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_limits_rescaled_from_line() {
        let line = Line3::with_limits(
            Point3::origin(),
            Vector3::new(0.0, 4.0, 0.0),
            Interval::new(0.0, 1.0),
        );
        let ul = UnitLine3::from(line);

        // t in [0, 4] in unit space covers the same points as [0, 1] against
        // the raw direction.
        assert_eq!(ul.limits(), Interval::new(0.0, 4.0));
        assert!(ul.inside(3.9));
        assert!(!ul.inside(4.1));

        let back = ul.to_line();
        assert_eq!(back.limits(), Interval::new(0.0, 1.0));
        assert_eq!(back.direction(), Vector3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn test_infinite_round_trip() {
        let line = Line3::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0));
        let ul = UnitLine3::from(line);

        assert!(ul.infinite());
        assert_eq!(ul.to_line(), line);
    }

    #[test]
    fn test_forward_ray_rejects_negatives() {
        let l = UnitLine3::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));

        assert!(l.inside(1.0));
        assert!(!l.inside(-1.0));
        assert!(!l.inside(0.0));
    }
}
