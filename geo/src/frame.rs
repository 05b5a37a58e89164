//! A complete coordinate system: an ortho-normal basis plus an origin.
//!
//! Transforming into the frame and back out are pure rotations and
//! translations; no scale or skew can sneak in.

use crate::{Coord3, Onb, Point3, Scalar, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<T> {
    basis: Onb<T>,
    origin: Point3<T>,
}

impl<T: Scalar> Frame<T> {
    pub fn new(origin: Point3<T>, w: Vector3<T>) -> Self {
        Frame {
            basis: Onb::from_w(w),
            origin,
        }
    }

    /// A frame looking along `a` with `b` as the up direction.
    pub fn from_wv(origin: Point3<T>, a: Vector3<T>, b: Vector3<T>) -> Self {
        Frame {
            basis: Onb::from_wv(a, b),
            origin,
        }
    }

    pub fn from_uvw(origin: Point3<T>, a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        Frame {
            basis: Onb::from_uvw(a, b, c),
            origin,
        }
    }

    pub fn basis(&self) -> &Onb<T> {
        &self.basis
    }

    pub fn origin(&self) -> Point3<T> {
        self.origin
    }

    pub fn u(&self) -> Vector3<T> {
        self.basis.u()
    }

    pub fn v(&self) -> Vector3<T> {
        self.basis.v()
    }

    pub fn w(&self) -> Vector3<T> {
        self.basis.w()
    }

    // Transform from the external frame INTO this frame.

    pub fn transform(&self, v: &Vector3<T>) -> Vector3<T> {
        self.basis.into_onb(v)
    }

    pub fn transform_point(&self, p: &Point3<T>) -> Point3<T> {
        let v = *p - self.origin;
        self.basis.into_onb_point(&Point3::new(v.x, v.y, v.z))
    }

    pub fn transform_coord(&self, c: &Coord3<T>) -> Coord3<T> {
        self.basis.into_onb_coord(&(*c - Coord3::from(self.origin)))
    }

    /// Normals are only ever rotated; renormalize to be safe.
    pub fn transform_normal(&self, n: &Vector3<T>) -> Vector3<T> {
        self.transform(n).unit()
    }

    // Transform OUT OF this frame into the global one.

    pub fn inverse_transform(&self, v: &Vector3<T>) -> Vector3<T> {
        self.basis.outof_onb(v)
    }

    pub fn inverse_transform_point(&self, p: &Point3<T>) -> Point3<T> {
        self.basis.outof_onb_point(p) + (self.origin - Point3::origin())
    }

    pub fn inverse_transform_coord(&self, c: &Coord3<T>) -> Coord3<T> {
        self.basis.outof_onb_coord(c) + Coord3::from(self.origin)
    }

    pub fn inverse_transform_normal(&self, n: &Vector3<T>) -> Vector3<T> {
        self.inverse_transform(n).unit()
    }

    /// The single frame equivalent to applying `inner` first, then `self`.
    pub fn combine(&self, inner: &Frame<T>) -> Frame<T> {
        Frame::from_uvw(
            self.inverse_transform_point(&inner.origin()),
            self.inverse_transform(&inner.u()),
            self.inverse_transform(&inner.v()),
            self.inverse_transform(&inner.w()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_round_trip() {
        let f = Frame::from_wv(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
        );

        let p = Point3::new(-2.0, 0.5, 4.0);
        let roundtrip = f.inverse_transform_point(&f.transform_point(&p));
        assert!((roundtrip - p).length() < 1e-10);

        let v = Vector3::new(1.0, -1.0, 0.5);
        let roundtrip = f.inverse_transform(&f.transform(&v));
        assert!((roundtrip - v).length() < 1e-10);
    }

    #[test]
    fn test_origin_maps_to_zero() {
        let f = Frame::new(Point3::new(5.0, 5.0, 5.0), Vector3::new(1.0, 0.0, 0.0));

        let local = f.transform_point(&f.origin());
        assert!((local - Point3::origin()).length() < 1e-10);
    }

    #[test]
    fn test_combined_frame_matches_nested_transforms() {
        let outer = Frame::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let inner = Frame::new(Point3::new(0.0, 2.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
        let combined = outer.combine(&inner);

        let p = Point3::new(0.3, 0.7, -1.1);
        let nested = outer.inverse_transform_point(&inner.inverse_transform_point(&p));
        let direct = combined.inverse_transform_point(&p);

        assert!((nested - direct).length() < 1e-10);
    }
}
