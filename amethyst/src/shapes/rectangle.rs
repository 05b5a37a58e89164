use geo::{Line3, Point3, Scalar, UnitLine3, Vector3};

use crate::capabilities::{IntersectionCapabilities, ObjectCapabilities};
use crate::intersection::IntersectionInfo;
use crate::requirements::IntersectionRequirements;
use crate::shapes::{Plane, Shape, Sphere};

/// A parallelogram spanned by the plane's `u` and `v` vectors; inside when
/// both plane coordinates are strictly between 0 and 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle<T> {
    plane: Plane<T>,
}

impl<T: Scalar> Rectangle<T> {
    pub fn new(point: Point3<T>, u: Vector3<T>, v: Vector3<T>) -> Self {
        Rectangle {
            plane: Plane::from_vectors(point, u, v),
        }
    }

    pub fn from_corners(corner1: Point3<T>, corner2: Point3<T>, corner3: Point3<T>) -> Self {
        Rectangle {
            plane: Plane::from_points(corner1, corner2, corner3),
        }
    }

    pub fn plane(&self) -> &Plane<T> {
        &self.plane
    }

    fn uv_inside(uv: &geo::Coord2<T>) -> bool {
        uv.x > T::zero() && uv.x < T::one() && uv.y > T::zero() && uv.y < T::one()
    }
}

impl<T: Scalar> Shape<T> for Rectangle<T> {
    fn inside(&self, p: &Point3<T>) -> bool {
        match self.plane.extract_uv_for_point(p) {
            Some(uv) => Rectangle::uv_inside(&uv),
            None => false,
        }
    }

    fn intersects_sphere(&self, s: &Sphere<T>) -> bool {
        let p = self.plane.origin();
        let pu = p + self.plane.u_vector();
        let pv = p + self.plane.v_vector();
        let puv = pu + self.plane.v_vector();

        s.inside(&p) || s.inside(&pu) || s.inside(&pv) || s.inside(&puv)
    }

    fn intersects_plane(&self, p: &Plane<T>) -> bool {
        let p1 = self.plane.origin();
        let p2 = p1 + self.plane.u_vector();
        let p4 = p1 + self.plane.v_vector();
        let p3 = p2 + self.plane.v_vector();

        let mut unused = T::zero();
        // The diagonals handle a plane slicing exactly through two corners.
        [(p1, p2), (p1, p4), (p2, p3), (p4, p3), (p2, p4), (p1, p3)]
            .into_iter()
            .any(|(a, b)| {
                p.quick_intersection(
                    &UnitLine3::from(Line3::between(a, b)),
                    T::zero(),
                    &mut unused,
                )
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
            Some(uv) if Rectangle::uv_inside(&uv) => {
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
            Some(uv) if Rectangle::uv_inside(&uv) => {
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
        "rectangle"
    }

    fn internal_members(&self, indentation: &str, prefix_with_classname: bool) -> String {
        self.plane.internal_members(indentation, prefix_with_classname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_rect() -> Rectangle<f64> {
        Rectangle::new(
            Point3::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_inside() {
        let r = unit_rect();

        assert!(r.inside(&Point3::new(0.5, 0.5, 0.0)));
        assert!(r.inside(&Point3::new(0.9, 0.9, 0.0)));
        assert!(!r.inside(&Point3::new(1.1, 0.5, 0.0)));
        assert!(!r.inside(&Point3::new(0.5, 0.5, 0.2)));
        assert!(!r.inside(&Point3::origin()));
    }

    #[test]
    fn test_intersects_line() {
        let r = unit_rect();

        let hit = UnitLine3::new(Point3::new(0.5, 0.5, 1.0), Vector3::new(0.0, 0.0, -1.0));
        let mut info = IntersectionInfo::new();
        assert!(r.intersects_line(&hit, &mut info, &IntersectionRequirements::new()));
        assert_eq!(info.first_distance(), Some(1.0));
        assert_eq!(info.shape().map(|s| s.name()), Some("rectangle"));

        let miss = UnitLine3::new(Point3::new(1.5, 0.5, 1.0), Vector3::new(0.0, 0.0, -1.0));
        let mut info = IntersectionInfo::new();
        assert!(!r.intersects_line(&miss, &mut info, &IntersectionRequirements::new()));
    }

    #[test]
    fn test_intersects_plane_through_corners() {
        let r = unit_rect();

        // slices diagonally through two corners
        let diagonal = Plane::new(Point3::new(0.5, 0.5, 0.0), Vector3::new(1.0, 1.0, 0.0));
        assert!(r.intersects_plane(&diagonal));

        let above = Plane::new(Point3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(!r.intersects_plane(&above));
    }
}
