use geo::{Line3, Point3, Scalar, UnitLine3};

use crate::capabilities::{IntersectionCapabilities, ObjectCapabilities};
use crate::intersection::IntersectionInfo;
use crate::requirements::IntersectionRequirements;
use crate::shapes::{Plane, Shape, Sphere};

/// A triangle, built on a plane whose `(u, v)` basis is the pair of edges
/// out of the first corner. A point is inside when its barycentric
/// coordinates `(a, b)` satisfy `a > 0`, `b > 0` and `a + b < 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle<T> {
    plane: Plane<T>,
}

impl<T: Scalar> Triangle<T> {
    pub fn new(corner1: Point3<T>, corner2: Point3<T>, corner3: Point3<T>) -> Self {
        Triangle {
            plane: Plane::from_points(corner1, corner2, corner3),
        }
    }

    pub fn plane(&self) -> &Plane<T> {
        &self.plane
    }

    fn barycentric_inside(uv: &geo::Coord2<T>) -> bool {
        uv.x > T::zero() && uv.y > T::zero() && uv.x + uv.y < T::one()
    }
}

impl<T: Scalar> Shape<T> for Triangle<T> {
    fn inside(&self, p: &Point3<T>) -> bool {
        match self.plane.extract_uv_for_point(p) {
            Some(uv) => Triangle::barycentric_inside(&uv),
            None => false,
        }
    }

    fn intersects_sphere(&self, s: &Sphere<T>) -> bool {
        // Any corner inside the sphere is an intersection.
        let p = self.plane.origin();

        s.inside(&p)
            || s.inside(&(p + self.plane.u_vector()))
            || s.inside(&(p + self.plane.v_vector()))
    }

    fn intersects_plane(&self, p: &Plane<T>) -> bool {
        let c1 = self.plane.origin();
        let c2 = c1 + self.plane.u_vector();
        let c3 = c1 + self.plane.v_vector();

        let mut unused = T::zero();
        [(c1, c2), (c1, c3), (c2, c3)].into_iter().any(|(a, b)| {
            p.quick_intersection(&UnitLine3::from(Line3::between(a, b)), T::zero(), &mut unused)
        })
    }

    fn intersects_line<'a>(
        &'a self,
        line: &UnitLine3<T>,
        info: &mut IntersectionInfo<'a, T>,
        requirements: &IntersectionRequirements,
    ) -> bool {
        let mut temp = IntersectionInfo::new();
        let temp_requirements = requirements.force_uv(true);

        if !self.plane.intersects_line(line, &mut temp, &temp_requirements) {
            return false;
        }

        match temp.uv() {
            Some(uv) if Triangle::barycentric_inside(&uv) => {
                // The plane honored the requirements already; only the
                // shape back-reference needs to point at the triangle.
                *info = temp;
                info.set_shape(self);
                true
            }
            _ => false,
        }
    }

    fn quick_intersection(&self, line: &UnitLine3<T>, time: T, distance: &mut T) -> bool {
        let mut d = T::zero();
        if !self.plane.quick_intersection(line, time, &mut d) {
            return false;
        }

        match self.plane.extract_uv_for_point(&line.point_at(d)) {
            Some(uv) if Triangle::barycentric_inside(&uv) => {
                *distance = d;
                true
            }
            _ => false,
        }
    }

    fn intersection_capabilities(&self) -> IntersectionCapabilities {
        self.plane.intersection_capabilities()
    }

    fn object_capabilities(&self) -> ObjectCapabilities {
        ObjectCapabilities::BOUNDABLE
            | ObjectCapabilities::SIMPLE
            | ObjectCapabilities::POLYGONIZATION
    }

    fn name(&self) -> &'static str {
        "triangle"
    }

    fn internal_members(&self, indentation: &str, prefix_with_classname: bool) -> String {
        self.plane.internal_members(indentation, prefix_with_classname)
    }
}

#[cfg(test)]
mod tests {
    use geo::Vector3;

    use super::*;

    fn unit_triangle() -> Triangle<f64> {
        Triangle::new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_inside() {
        let t = unit_triangle();

        assert!(t.inside(&Point3::new(0.25, 0.25, 0.0)));
        assert!(!t.inside(&Point3::new(0.75, 0.75, 0.0)));
        assert!(!t.inside(&Point3::new(0.25, 0.25, 0.5)));
        // corners and edges are not strictly inside
        assert!(!t.inside(&Point3::origin()));
        assert!(!t.inside(&Point3::new(0.5, 0.0, 0.0)));
    }

    #[test]
    fn test_intersects_line() {
        let t = unit_triangle();
        let reqs = IntersectionRequirements::new().force_normal(true).force_uv(true);

        let hit = UnitLine3::new(Point3::new(0.25, 0.25, 2.0), Vector3::new(0.0, 0.0, -1.0));
        let mut info = IntersectionInfo::new();
        assert!(t.intersects_line(&hit, &mut info, &reqs));
        assert_eq!(info.first_distance(), Some(2.0));
        assert_eq!(info.shape().map(|s| s.name()), Some("triangle"));
        assert!(info.have_uv());

        let miss = UnitLine3::new(Point3::new(0.75, 0.75, 2.0), Vector3::new(0.0, 0.0, -1.0));
        let mut info = IntersectionInfo::new();
        assert!(!t.intersects_line(&miss, &mut info, &reqs));
    }

    #[test]
    fn test_quick_matches_full() {
        let t = Triangle::new(
            Point3::new(-1.0, -1.0, -3.0),
            Point3::new(2.0, -0.5, -3.5),
            Point3::new(0.0, 2.0, -4.0),
        );
        let line = UnitLine3::new(Point3::origin(), Vector3::new(0.05, 0.1, -1.0));

        let mut info = IntersectionInfo::new();
        assert!(t.intersects_line(&line, &mut info, &IntersectionRequirements::new()));

        let mut d = 0.0;
        assert!(t.quick_intersection(&line, 0.0, &mut d));
        assert_eq!(info.first_distance(), Some(d));
    }

    #[test]
    fn test_intersects_sphere() {
        let t = unit_triangle();

        assert!(t.intersects_sphere(&Sphere::new(Point3::new(1.0, 0.0, 0.0), 0.5)));
        assert!(!t.intersects_sphere(&Sphere::new(Point3::new(5.0, 5.0, 5.0), 0.5)));
    }
}
