use geo::{Point3, Scalar, UnitLine3, Vector3};

use crate::capabilities::{IntersectionCapabilities, ObjectCapabilities};
use crate::intersection::IntersectionInfo;
use crate::requirements::IntersectionRequirements;
use crate::shapes::{Plane, Shape, Sphere};

/// A disc: the points of a plane within `radius` of its origin, measured in
/// the plane's `(u, v)` projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Disc<T> {
    plane: Plane<T>,
    radius: T,
    radius_squared: T,
}

impl<T: Scalar> Disc<T> {
    pub fn new(point: Point3<T>, radius: T, normal: Vector3<T>) -> Self {
        Disc {
            plane: Plane::new(point, normal),
            radius,
            radius_squared: radius * radius,
        }
    }

    pub fn with_u(point: Point3<T>, radius: T, normal: Vector3<T>, u: Vector3<T>) -> Self {
        Disc {
            plane: Plane::with_u(point, normal, u.unit()),
            radius,
            radius_squared: radius * radius,
        }
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    pub fn plane(&self) -> &Plane<T> {
        &self.plane
    }

    fn uv_inside(&self, uv: &geo::Coord2<T>) -> bool {
        uv.x * uv.x + uv.y * uv.y < self.radius_squared + T::tolerance()
    }
}

impl<T: Scalar> Shape<T> for Disc<T> {
    fn inside(&self, p: &Point3<T>) -> bool {
        match self.plane.extract_uv_for_point(p) {
            Some(uv) => uv.x * uv.x + uv.y * uv.y < self.radius_squared,
            None => false,
        }
    }

    fn intersects_sphere(&self, s: &Sphere<T>) -> bool {
        let sphere_vector = s.center() - self.plane.origin();
        let projected_n = sphere_vector.dot(&self.plane.normal());
        let projected_n_squared = projected_n * projected_n;
        let sphere_radius_squared = s.radius() * s.radius();

        if sphere_radius_squared < projected_n_squared {
            return false;
        }

        // The sphere cuts the plane in a circle; by Pythagoras its radius
        // follows from the sphere radius and the center-to-plane distance.
        let projected_radius = (sphere_radius_squared - projected_n_squared).sqrt();

        let projected_u = sphere_vector.dot(&self.plane.u_vector());
        let projected_v = sphere_vector.dot(&self.plane.v_vector());
        let distance_to_center =
            (projected_u * projected_u + projected_v * projected_v).sqrt();

        self.radius + projected_radius + T::tolerance() > distance_to_center
    }

    fn intersects_plane(&self, p: &Plane<T>) -> bool {
        let normal_proj = self.plane.normal().dot(&p.normal()).abs();

        if normal_proj >= T::one() - T::tolerance() {
            // Parallel planes only touch the disc when they coincide.
            return self.plane.intersects_plane(p);
        }

        // The planes cross in a line lying in the disc's plane; the disc is
        // hit when that line passes within the radius of the disc origin.
        // `m` is the in-plane direction perpendicular to the crossing line.
        let line_dir = self.plane.normal().cross(&p.normal());
        let m = self.plane.normal().cross(&line_dir).unit();

        let offset = (p.origin() - self.plane.origin()).dot(&p.normal()) / m.dot(&p.normal());

        offset.abs() < self.radius + T::tolerance()
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
            Some(uv) if self.uv_inside(&uv) => {
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

        let hit = line.point_at(d);
        let from_center = hit - self.plane.origin();

        if from_center.dot(&from_center) < self.radius_squared + T::tolerance() {
            *distance = d;
            true
        } else {
            false
        }
    }

    fn intersection_capabilities(&self) -> IntersectionCapabilities {
        self.plane.intersection_capabilities()
    }

    fn object_capabilities(&self) -> ObjectCapabilities {
        let mut caps = self.plane.object_capabilities();

        caps.remove(ObjectCapabilities::NOT_FINITE);
        caps.insert(ObjectCapabilities::BOUNDABLE);
        caps.insert(ObjectCapabilities::POLYGONIZATION);

        caps
    }

    fn name(&self) -> &'static str {
        "disc"
    }

    fn internal_members(&self, indentation: &str, prefix_with_classname: bool) -> String {
        let mut out = self.plane.internal_members(indentation, true);

        let tag = if prefix_with_classname {
            format!("{indentation}{}::", self.name())
        } else {
            indentation.to_owned()
        };
        out.push_str(&format!("{tag}radius={:?}\n", self.radius));

        out
    }
}
