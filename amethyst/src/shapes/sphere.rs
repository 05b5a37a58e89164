use geo::{Coord2, Point3, Scalar, UnitLine3};

use crate::capabilities::{IntersectionCapabilities, ObjectCapabilities};
use crate::intersection::IntersectionInfo;
use crate::requirements::IntersectionRequirements;
use crate::shapes::{Plane, Shape};

/// Find the first parameter along `line` intersecting the sphere with the
/// given center and squared radius, if any lies within the line's limits.
pub fn quick_sphere_intersection<T: Scalar>(
    center: &Point3<T>,
    radius_squared: T,
    line: &UnitLine3<T>,
) -> Option<T> {
    let oc = line.origin() - *center;
    let two = T::of(2.0);

    let a = line.direction().dot(&line.direction());
    let b = two * line.direction().dot(&oc);
    let c = oc.dot(&oc) - radius_squared;

    let discriminant = b * b - T::of(4.0) * a * c;
    if discriminant < T::zero() {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    // If t1 is inside the limits it must be the nearest, as a is the
    // squared direction length (never negative) and the subtraction is
    // always smaller than the addition.
    let t1 = (-b - sqrtd) / (two * a);
    if line.inside(t1) {
        return Some(t1);
    }

    let t2 = (-b + sqrtd) / (two * a);
    if line.inside(t2) {
        return Some(t2);
    }

    None
}

/// A sphere: a center and a radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere<T> {
    center: Point3<T>,
    radius: T,
    radius_squared: T,
}

impl<T: Scalar> Sphere<T> {
    pub fn new(center: Point3<T>, radius: T) -> Self {
        let radius = radius.abs();

        Sphere {
            center,
            radius,
            radius_squared: radius * radius,
        }
    }

    pub fn center(&self) -> Point3<T> {
        self.center
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    /// Spherical (u, v) coordinates of a surface point.
    fn uv(&self, location: &Point3<T>) -> Coord2<T> {
        let pi = T::of(std::f64::consts::PI);
        let p = (*location - self.center) / self.radius;

        // theta in [0, pi], phi in [-pi, pi]
        let theta = p.y.acos();
        let phi = p.z.atan2(p.x);

        let u = (pi - phi) / (pi + pi);
        let v = T::one() - theta / pi;

        Coord2::new(u, v)
    }
}

impl<T: Scalar> Shape<T> for Sphere<T> {
    fn inside(&self, p: &Point3<T>) -> bool {
        // The epsilon-adjusted radius is r^2 + 2*r*e + e^2.
        let e = T::tolerance();
        (*p - self.center).length2()
            < self.radius_squared + T::of(2.0) * self.radius * e + e * e
    }

    fn intersects_sphere(&self, s: &Sphere<T>) -> bool {
        let combined = s.radius + self.radius + T::tolerance();
        (s.center - self.center).length2() < combined * combined
    }

    fn intersects_plane(&self, p: &Plane<T>) -> bool {
        p.intersects_sphere(self)
    }

    fn intersects_line<'a>(
        &'a self,
        line: &UnitLine3<T>,
        info: &mut IntersectionInfo<'a, T>,
        requirements: &IntersectionRequirements,
    ) -> bool {
        if !self
            .intersection_capabilities()
            .contains(requirements.capabilities_needed())
        {
            return false;
        }

        match quick_sphere_intersection(&self.center, self.radius_squared, line) {
            Some(distance) => {
                let hit = line.point_at(distance);

                info.set_shape(self);
                info.set_first_distance(distance);
                info.set_first_point(hit);
                info.set_ray(*line);

                if requirements.needs_normal() {
                    info.set_normal((hit - self.center).unit());
                }
                if requirements.needs_uv() {
                    info.set_uv(self.uv(&hit));
                }

                true
            }
            None => false,
        }
    }

    fn quick_intersection(&self, line: &UnitLine3<T>, _time: T, distance: &mut T) -> bool {
        // Not a moving or resizing sphere, the time is irrelevant.
        match quick_sphere_intersection(&self.center, self.radius_squared, line) {
            Some(d) => {
                *distance = d;
                true
            }
            None => false,
        }
    }

    fn intersection_capabilities(&self) -> IntersectionCapabilities {
        IntersectionCapabilities::HIT_FIRST
            | IntersectionCapabilities::HIT_ALL
            | IntersectionCapabilities::NORMAL_CALCULATION
            | IntersectionCapabilities::UV_CALCULATION
    }

    fn object_capabilities(&self) -> ObjectCapabilities {
        ObjectCapabilities::BOUNDABLE | ObjectCapabilities::SIMPLE
    }

    fn name(&self) -> &'static str {
        "sphere"
    }

    fn internal_members(&self, indentation: &str, prefix_with_classname: bool) -> String {
        let tag = if prefix_with_classname {
            format!("{indentation}{}::", self.name())
        } else {
            indentation.to_owned()
        };

        format!(
            "{indentation}intersection_capabilities={:?}\n\
             {indentation}object_capabilities={:?}\n\
             {tag}center=({:?},{:?},{:?})\n\
             {tag}radius={:?}\n",
            self.intersection_capabilities(),
            self.object_capabilities(),
            self.center.x,
            self.center.y,
            self.center.z,
            self.radius,
        )
    }
}
