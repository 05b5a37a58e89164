use crate::vector_utils::perp_vector;
use crate::{Coord3, Point3, Scalar, Vector3};

/// An ortho-normal basis: three mutually perpendicular unit vectors.
///
/// Supports single-rotation transforms of coords, points and vectors into
/// and out of the basis. [`into_onb`](Onb::into_onb) and
/// [`outof_onb`](Onb::outof_onb) are inverses of each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Onb<T> {
    u: Vector3<T>,
    v: Vector3<T>,
    w: Vector3<T>,
}

impl<T: Scalar> Default for Onb<T> {
    fn default() -> Self {
        Onb {
            u: Vector3::new(T::one(), T::zero(), T::zero()),
            v: Vector3::new(T::zero(), T::one(), T::zero()),
            w: Vector3::new(T::zero(), T::zero(), T::one()),
        }
    }
}

impl<T: Scalar> Onb<T> {
    /// An ONB where only the direction of `w` matters; the perpendicular
    /// pair is chosen arbitrarily.
    pub fn from_w(a: Vector3<T>) -> Self {
        let w = a.unit();
        let v = perp_vector(&w);
        let u = v.cross(&w);

        Onb { u, v, w }
    }

    /// An ONB from a plane: `a` gives the direction of `w`, `b` the
    /// direction of `v`, and `u` is their normal.
    pub fn from_wv(a: Vector3<T>, b: Vector3<T>) -> Self {
        let w = a.unit();
        let v = b.unit();
        let u = v.cross(&w);

        Onb { u, v, w }
    }

    /// An ONB with all three directions given.
    pub fn from_uvw(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        Onb {
            u: a.unit(),
            v: b.unit(),
            w: c.unit(),
        }
    }

    pub fn u(&self) -> Vector3<T> {
        self.u
    }

    pub fn v(&self) -> Vector3<T> {
        self.v
    }

    pub fn w(&self) -> Vector3<T> {
        self.w
    }

    pub fn into_onb(&self, c: &Vector3<T>) -> Vector3<T> {
        Vector3::new(c.dot(&self.u), c.dot(&self.v), c.dot(&self.w))
    }

    pub fn outof_onb(&self, c: &Vector3<T>) -> Vector3<T> {
        self.u * c.x + self.v * c.y + self.w * c.z
    }

    pub fn into_onb_point(&self, p: &Point3<T>) -> Point3<T> {
        let cv = Vector3::new(p.x, p.y, p.z);
        Point3::new(cv.dot(&self.u), cv.dot(&self.v), cv.dot(&self.w))
    }

    pub fn outof_onb_point(&self, p: &Point3<T>) -> Point3<T> {
        let cv = self.u * p.x + self.v * p.y + self.w * p.z;
        Point3::new(cv.x, cv.y, cv.z)
    }

    pub fn into_onb_coord(&self, c: &Coord3<T>) -> Coord3<T> {
        self.into_onb(&Vector3::from(*c)).into()
    }

    pub fn outof_onb_coord(&self, c: &Coord3<T>) -> Coord3<T> {
        self.outof_onb(&Vector3::from(*c)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let onb = Onb::<f64>::default();
        let v = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(onb.into_onb(&v), v);
        assert_eq!(onb.outof_onb(&v), v);
    }

    #[test]
    fn test_from_w_is_orthonormal() {
        let onb = Onb::from_w(Vector3::<f64>::new(1.0, 2.0, -0.5));

        assert!((onb.u().length() - 1.0).abs() < 1e-10);
        assert!((onb.v().length() - 1.0).abs() < 1e-10);
        assert!((onb.w().length() - 1.0).abs() < 1e-10);
        assert!(onb.u().dot(&onb.v()).abs() < 1e-10);
        assert!(onb.v().dot(&onb.w()).abs() < 1e-10);
        assert!(onb.u().dot(&onb.w()).abs() < 1e-10);
    }

    #[test]
    fn test_transforms_are_inverse() {
        let onb = Onb::from_wv(Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 1.0, 0.0));
        let v = Vector3::new(0.3, -1.2, 2.0);

        let roundtrip = onb.outof_onb(&onb.into_onb(&v));
        assert!((roundtrip - v).length() < 1e-10);

        let p = Point3::new(5.0, -1.0, 0.25);
        let roundtrip = onb.outof_onb_point(&onb.into_onb_point(&p));
        assert!((roundtrip - p).length() < 1e-10);
    }
}
