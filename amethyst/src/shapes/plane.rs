use geo::vector_utils::calculate_perpendicular_vectors;
use geo::{Axis, Coord2, Point3, Scalar, UnitLine3, Vector3};

use crate::capabilities::{IntersectionCapabilities, ObjectCapabilities};
use crate::intersection::IntersectionInfo;
use crate::requirements::IntersectionRequirements;
use crate::shapes::{Shape, Sphere};

/// An infinite plane with an in-plane `(u, v)` basis.
///
/// The `u`/`v` vectors double as the parameterization the derived shapes
/// (triangle, disc, rectangle) gate their containment tests on, so they are
/// not required to be unit length or even orthogonal; for a triangle they
/// are its edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T> {
    point: Point3<T>,
    normal: Vector3<T>,
    u: Vector3<T>,
    v: Vector3<T>,
    // The coordinate axes on which u (resp. v) has a usable non-zero
    // component, selected once at construction for extract_uv_for_point.
    nz_u: Axis,
    nz_v: Axis,
}

impl<T: Scalar> Plane<T> {
    /// A plane through `point` with the given orientation; the `(u, v)`
    /// basis is an arbitrary orthonormal tangent pair.
    pub fn new(point: Point3<T>, normal: Vector3<T>) -> Self {
        let normal = normal.unit();
        let (u, v) = calculate_perpendicular_vectors(&normal);

        Plane::from_parts(point, normal, u, v)
    }

    /// A plane with `u` chosen by the caller; `v` completes the basis.
    pub fn with_u(point: Point3<T>, normal: Vector3<T>, vec_u: Vector3<T>) -> Self {
        let normal = normal.unit();
        let v = normal.cross(&vec_u);
        let u = v.cross(&normal);

        Plane::from_parts(point, normal, u, v)
    }

    /// A plane through three points; `u` and `v` are the edges towards
    /// `plus_u` and `plus_v`.
    pub fn from_points(point: Point3<T>, plus_u: Point3<T>, plus_v: Point3<T>) -> Self {
        let u = plus_u - point;
        let v = plus_v - point;
        let normal = u.cross(&v).unit();

        Plane::from_parts(point, normal, u, v)
    }

    /// A plane with both basis vectors given; the normal is their cross
    /// product.
    pub fn from_vectors(point: Point3<T>, vec_u: Vector3<T>, vec_v: Vector3<T>) -> Self {
        let normal = vec_u.cross(&vec_v).unit();

        Plane::from_parts(point, normal, vec_u, vec_v)
    }

    fn from_parts(point: Point3<T>, normal: Vector3<T>, u: Vector3<T>, v: Vector3<T>) -> Self {
        let (nz_u, nz_v) = Plane::non_zero_indices(&u, &v);

        Plane {
            point,
            normal,
            u,
            v,
            nz_u,
            nz_v,
        }
    }

    fn non_zero_indices(u: &Vector3<T>, v: &Vector3<T>) -> (Axis, Axis) {
        let axes = [Axis::X, Axis::Y, Axis::Z];

        let nz_u = axes
            .into_iter()
            .find(|a| u[*a].abs() > T::tolerance())
            .unwrap_or(Axis::Z);
        let nz_v = axes
            .into_iter()
            .find(|a| *a != nz_u && v[*a].abs() > T::tolerance())
            .unwrap_or(Axis::Z);

        (nz_u, nz_v)
    }

    pub fn origin(&self) -> Point3<T> {
        self.point
    }

    pub fn normal(&self) -> Vector3<T> {
        self.normal
    }

    pub fn u_vector(&self) -> Vector3<T> {
        self.u
    }

    pub fn v_vector(&self) -> Vector3<T> {
        self.v
    }

    /// Project a point on the plane onto the `(u, v)` basis, solving the 2x2
    /// system spanned by the two construction-selected coordinate axes.
    /// `None` when the point is not on the plane.
    pub fn extract_uv_for_point(&self, point: &Point3<T>) -> Option<Coord2<T>> {
        if !self.inside(point) {
            return None;
        }

        let diff = *point - self.point;
        let u_scalar = self.u[self.nz_v] / self.u[self.nz_u];

        let v = (diff[self.nz_v] - diff[self.nz_u] * u_scalar)
            / (self.v[self.nz_v] - self.v[self.nz_u] * u_scalar);
        let u = (diff[self.nz_u] - v * self.v[self.nz_u]) / self.u[self.nz_u];

        Some(Coord2::new(u, v))
    }

    /// The raw plane-crossing parameter for a line, with the sign of the
    /// denominator folded in.
    ///
    /// When the line is parallel to the plane the division yields an
    /// infinity (or NaN for a line in the plane), and any comparison against
    /// the line limits is then false, so the caller's range test rejects the
    /// hit without a special case.
    fn crossing_parameter(&self, line: &UnitLine3<T>) -> T {
        let ctheta = line.direction().dot(&self.normal);

        if ctheta > T::zero() {
            (self.point - line.origin()).dot(&self.normal) / ctheta
        } else {
            (self.point - line.origin()).dot(&-self.normal) / -ctheta
        }
    }
}

impl<T: Scalar> Shape<T> for Plane<T> {
    fn inside(&self, p: &Point3<T>) -> bool {
        let dist = (*p - self.point).dot(&self.normal);
        dist.abs() < T::tolerance()
    }

    fn intersects_sphere(&self, s: &Sphere<T>) -> bool {
        let dist = (s.center() - self.point).dot(&self.normal);
        dist.abs() < s.radius() + T::tolerance()
    }

    fn intersects_plane(&self, p: &Plane<T>) -> bool {
        let normal_proj = self.normal.dot(&p.normal).abs();

        if normal_proj < T::one() - T::tolerance() {
            // Not parallel, so they cross somewhere.
            true
        } else {
            // Parallel planes only meet when they are the same plane.
            (self.point - p.point).length2() < T::tolerance()
        }
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

        let t = self.crossing_parameter(line);
        if !line.inside(t) {
            return false;
        }

        let hit = line.point_at(t);

        info.set_shape(self);
        info.set_first_distance(t);
        info.set_first_point(hit);
        info.set_ray(*line);

        if requirements.needs_normal() {
            info.set_normal(self.normal);
        }
        if requirements.needs_uv() {
            if let Some(uv) = self.extract_uv_for_point(&hit) {
                info.set_uv(uv);
            }
        }

        true
    }

    fn quick_intersection(&self, line: &UnitLine3<T>, _time: T, distance: &mut T) -> bool {
        let t = self.crossing_parameter(line);

        if line.inside(t) {
            *distance = t;
            true
        } else {
            false
        }
    }

    fn intersection_capabilities(&self) -> IntersectionCapabilities {
        IntersectionCapabilities::HIT_FIRST
            | IntersectionCapabilities::HIT_ALL
            | IntersectionCapabilities::NORMAL_CALCULATION
            | IntersectionCapabilities::UV_CALCULATION
    }

    fn object_capabilities(&self) -> ObjectCapabilities {
        ObjectCapabilities::NOT_FINITE | ObjectCapabilities::SIMPLE
    }

    fn name(&self) -> &'static str {
        "plane"
    }

    fn internal_members(&self, indentation: &str, prefix_with_classname: bool) -> String {
        let tag = if prefix_with_classname {
            format!("{indentation}{}::", self.name())
        } else {
            indentation.to_owned()
        };

        format!(
            "{tag}point=({:?},{:?},{:?})\n\
             {tag}normal=({:?},{:?},{:?})\n\
             {tag}u=({:?},{:?},{:?})\n\
             {tag}v=({:?},{:?},{:?})\n\
             {tag}nz_indices=({:?},{:?})\n",
            self.point.x,
            self.point.y,
            self.point.z,
            self.normal.x,
            self.normal.y,
            self.normal.z,
            self.u.x,
            self.u.y,
            self.u.z,
            self.v.x,
            self.v.y,
            self.v.z,
            self.nz_u,
            self.nz_v,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside() {
        let p = Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0));

        assert!(p.inside(&Point3::new(5.0, -3.0, 0.0)));
        assert!(!p.inside(&Point3::new(0.0, 0.0, 0.1)));
    }

    #[test]
    fn test_head_on_intersection() {
        let p = Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0));
        let line = UnitLine3::new(Point3::new(0.0, 0.0, 3.0), Vector3::new(0.0, 0.0, -1.0));

        let reqs = IntersectionRequirements::new().force_normal(true);
        let mut info = IntersectionInfo::new();

        assert!(p.intersects_line(&line, &mut info, &reqs));
        assert_eq!(info.first_distance(), Some(3.0));
        assert_eq!(info.first_point(), Some(Point3::origin()));
        assert_eq!(info.normal(), Some(Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_parallel_line_misses() {
        let p = Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0));
        let line = UnitLine3::new(Point3::new(0.0, 0.0, 3.0), Vector3::new(1.0, 0.0, 0.0));

        let mut info = IntersectionInfo::new();
        assert!(!p.intersects_line(&line, &mut info, &IntersectionRequirements::new()));
    }

    #[test]
    fn test_hit_from_either_side() {
        let p = Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0));

        let mut d: f64 = 0.0;
        let above = UnitLine3::new(Point3::new(0.0, 0.0, 2.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(p.quick_intersection(&above, 0.0, &mut d));
        assert!((d - 2.0).abs() < 1e-12);

        let below = UnitLine3::new(Point3::new(0.0, 0.0, -2.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(p.quick_intersection(&below, 0.0, &mut d));
        assert!((d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_extract_uv_against_edges() {
        // u and v are the edges of the implied parallelogram, so the uv of
        // the opposite corners are the unit coordinates.
        let p = Plane::from_points(
            Point3::<f64>::origin(),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        );

        let uv = p.extract_uv_for_point(&Point3::new(2.0, 0.0, 0.0)).unwrap();
        assert!((uv.x - 1.0).abs() < 1e-12 && uv.y.abs() < 1e-12);

        let uv = p.extract_uv_for_point(&Point3::new(0.0, 3.0, 0.0)).unwrap();
        assert!(uv.x.abs() < 1e-12 && (uv.y - 1.0).abs() < 1e-12);

        let uv = p.extract_uv_for_point(&Point3::new(1.0, 1.5, 0.0)).unwrap();
        assert!((uv.x - 0.5).abs() < 1e-12 && (uv.y - 0.5).abs() < 1e-12);

        assert!(p.extract_uv_for_point(&Point3::new(0.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn test_plane_plane_overlap() {
        let p1 = Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0));
        let p2 = Plane::new(Point3::origin(), Vector3::new(0.0, 1.0, 1.0));
        let p3 = Plane::new(Point3::new(0.0, 0.0, 4.0), Vector3::new(0.0, 0.0, 1.0));

        assert!(p1.intersects_plane(&p2));
        assert!(!p1.intersects_plane(&p3));
        assert!(p1.intersects_plane(&p1.clone()));
    }

    #[test]
    fn test_x_major_normal_still_extracts_uv() {
        // A normal along x must not degenerate the basis or the projection.
        let p = Plane::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
        let point = Point3::new(0.0, 0.5, -0.25);

        let uv = p.extract_uv_for_point(&point).unwrap();
        let rebuilt = p.origin() + p.u_vector() * uv.x + p.v_vector() * uv.y;
        assert!((rebuilt - point).length() < 1e-10);
    }
}
