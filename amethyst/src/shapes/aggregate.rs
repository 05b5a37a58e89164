use geo::{Point3, Scalar, UnitLine3};

use crate::capabilities::{IntersectionCapabilities, ObjectCapabilities};
use crate::intersection::IntersectionInfo;
use crate::ray_parameters::RayParameters;
use crate::requirements::IntersectionRequirements;
use crate::shapes::{Plane, Shape, ShapeRef, Sphere};

/// An aggregate (collection) of shapes.
///
/// Children are shared references: the same primitive may appear in several
/// aggregates and the graph is read-only while rendering. Intersection
/// queries forward to every child and combine the results: nearest-hit by
/// default, every hit (with container bookkeeping) when the requirements ask
/// for it.
#[derive(Debug, Default)]
pub struct Aggregate<T> {
    shapes: Vec<ShapeRef<T>>,
}

impl<T: Scalar> Aggregate<T> {
    pub fn new() -> Self {
        Aggregate { shapes: Vec::new() }
    }

    pub fn add(&mut self, shape: ShapeRef<T>) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShapeRef<T>> {
        self.shapes.get(index)
    }

    fn combine<'a>(
        &'a self,
        hit_before: bool,
        mut child_hit: IntersectionInfo<'a, T>,
        info: &mut IntersectionInfo<'a, T>,
        requirements: &IntersectionRequirements,
    ) {
        if hit_before && requirements.needs_containers() {
            child_hit.append_container(self);
        }

        if !requirements.needs_all_hits() {
            // The easy case: the whole record is replaced when the new hit
            // is closer than the current one (if any).
            if !hit_before || child_hit.first_distance() < info.first_distance() {
                *info = child_hit;
            }
            return;
        }

        // The messier case: every sub-hit is preserved, and the nearest
        // shape/distance pair is mirrored in the main record for direct
        // comparison.
        let closer = match (child_hit.first_distance(), info.first_distance()) {
            (Some(new), Some(old)) => new < old,
            (Some(_), None) => true,
            _ => false,
        };

        if !hit_before || closer {
            if let Some(shape) = child_hit.shape() {
                info.set_shape(shape);
            }
            if let Some(distance) = child_hit.first_distance() {
                info.set_first_distance(distance);
            }
        }

        info.append_intersection(child_hit);
    }
}

impl<T: Scalar> Shape<T> for Aggregate<T> {
    fn inside(&self, p: &Point3<T>) -> bool {
        self.shapes.iter().any(|s| s.inside(p))
    }

    fn intersects_sphere(&self, s: &Sphere<T>) -> bool {
        self.shapes.iter().any(|c| c.intersects_sphere(s))
    }

    fn intersects_plane(&self, p: &Plane<T>) -> bool {
        self.shapes.iter().any(|c| c.intersects_plane(p))
    }

    fn intersects_line<'a>(
        &'a self,
        line: &UnitLine3<T>,
        info: &mut IntersectionInfo<'a, T>,
        requirements: &IntersectionRequirements,
    ) -> bool {
        let mut intersects_something = false;

        *info = IntersectionInfo::new();

        for shape in &self.shapes {
            let mut child_hit = IntersectionInfo::new();
            if shape.intersects_line(line, &mut child_hit, requirements) {
                self.combine(intersects_something, child_hit, info, requirements);
                intersects_something = true;
            }
        }

        intersects_something
    }

    fn intersects_ray<'a>(
        &'a self,
        ray: &RayParameters<T>,
        info: &mut IntersectionInfo<'a, T>,
        requirements: &IntersectionRequirements,
    ) -> bool {
        let mut intersects_something = false;

        *info = IntersectionInfo::new();

        for shape in &self.shapes {
            let mut child_hit = IntersectionInfo::new();
            if shape.intersects_ray(ray, &mut child_hit, requirements) {
                self.combine(intersects_something, child_hit, info, requirements);
                intersects_something = true;
            }
        }

        intersects_something
    }

    fn quick_intersection(&self, line: &UnitLine3<T>, time: T, distance: &mut T) -> bool {
        let mut closest: Option<T> = None;

        for shape in &self.shapes {
            let mut d = T::zero();
            if shape.quick_intersection(line, time, &mut d)
                && closest.map_or(true, |c| d < c)
            {
                // The minimum limit doesn't need retesting; the child only
                // reported the hit because it was inside the line's range.
                closest = Some(d);
            }
        }

        match closest {
            Some(d) => {
                *distance = d;
                true
            }
            None => false,
        }
    }

    fn intersection_capabilities(&self) -> IntersectionCapabilities {
        let mut caps = IntersectionCapabilities::all();

        for shape in &self.shapes {
            caps &= shape.intersection_capabilities();
        }

        caps
    }

    fn object_capabilities(&self) -> ObjectCapabilities {
        let mut caps = ObjectCapabilities::all();

        caps.remove(ObjectCapabilities::MOVABLE);
        caps.remove(ObjectCapabilities::SIMPLE);
        caps.remove(ObjectCapabilities::IMPLICIT);
        caps.insert(ObjectCapabilities::CONTAINER);

        for shape in &self.shapes {
            let child = shape.object_capabilities();

            if child.contains(ObjectCapabilities::NOT_FINITE) {
                caps.remove(ObjectCapabilities::BOUNDABLE);
            }
            if child.contains(ObjectCapabilities::BOUNDABLE) {
                caps.remove(ObjectCapabilities::NOT_FINITE);
            }
            if child.contains(ObjectCapabilities::MOVABLE) {
                caps.insert(ObjectCapabilities::MOVABLE);
            }
            if !child.contains(ObjectCapabilities::POLYGONIZATION) {
                caps.remove(ObjectCapabilities::POLYGONIZATION);
            }
            if child.contains(ObjectCapabilities::IMPLICIT) {
                caps.insert(ObjectCapabilities::IMPLICIT);
            }
        }

        caps
    }

    fn name(&self) -> &'static str {
        "aggregate"
    }

    fn internal_members(&self, indentation: &str, prefix_with_classname: bool) -> String {
        let _ = prefix_with_classname;

        let mut out = format!(
            "{indentation}intersection_capabilities={:?}\n\
             {indentation}object_capabilities={:?}\n",
            self.intersection_capabilities(),
            self.object_capabilities(),
        );

        for shape in &self.shapes {
            out.push_str(&shape.describe(indentation));
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use geo::Vector3;

    use super::*;

    fn two_spheres() -> Aggregate<f64> {
        let mut agg = Aggregate::new();
        agg.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0)));
        agg.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -10.0), 1.0)));
        agg
    }

    fn z_ray() -> UnitLine3<f64> {
        UnitLine3::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_nearest_child_wins() {
        let agg = two_spheres();

        let mut info = IntersectionInfo::new();
        assert!(agg.intersects_line(&z_ray(), &mut info, &IntersectionRequirements::new()));
        assert_eq!(info.first_distance(), Some(4.0));
    }

    #[test]
    fn test_quick_intersection_is_minimum() {
        let agg = two_spheres();

        let mut d = 0.0;
        assert!(agg.quick_intersection(&z_ray(), 0.0, &mut d));
        assert_eq!(d, 4.0);
    }

    #[test]
    fn test_all_hits_collects_every_child() {
        let agg = two_spheres();
        let reqs = IntersectionRequirements::new().force_all_hits(true);

        let mut info = IntersectionInfo::new();
        assert!(agg.intersects_line(&z_ray(), &mut info, &reqs));

        assert_eq!(info.all_hits().len(), 2);
        assert_eq!(info.first_distance(), Some(4.0));
    }

    #[test]
    fn test_containers_recorded_for_later_hits() {
        let agg = two_spheres();
        let reqs = IntersectionRequirements::new()
            .force_all_hits(true)
            .force_containers(true);

        let mut info = IntersectionInfo::new();
        assert!(agg.intersects_line(&z_ray(), &mut info, &reqs));

        // Every hit after the first records the aggregate it sits inside.
        assert!(info.all_hits()[0].containers().is_empty());
        assert_eq!(info.all_hits()[1].containers().len(), 1);
        assert_eq!(info.all_hits()[1].containers()[0].name(), "aggregate");
    }

    #[test]
    fn test_shared_children() {
        let shared: ShapeRef<f64> = Arc::new(Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0));

        let mut a = Aggregate::new();
        a.add(Arc::clone(&shared));
        let mut b = Aggregate::new();
        b.add(shared);

        let mut da = 0.0;
        let mut db = 0.0;
        assert!(a.quick_intersection(&z_ray(), 0.0, &mut da));
        assert!(b.quick_intersection(&z_ray(), 0.0, &mut db));
        assert_eq!(da, db);
    }

    #[test]
    fn test_capability_combination() {
        let mut agg = two_spheres();

        let caps = agg.intersection_capabilities();
        assert!(caps.contains(IntersectionCapabilities::HIT_FIRST));
        assert!(caps.contains(IntersectionCapabilities::NORMAL_CALCULATION));

        let obj = agg.object_capabilities();
        assert!(obj.contains(ObjectCapabilities::CONTAINER));
        assert!(obj.contains(ObjectCapabilities::BOUNDABLE));
        assert!(!obj.contains(ObjectCapabilities::NOT_FINITE));
        // spheres can't be polygonized, so neither can the aggregate
        assert!(!obj.contains(ObjectCapabilities::POLYGONIZATION));

        // An infinite child strips boundability.
        agg.add(Arc::new(Plane::new(
            Point3::origin(),
            Vector3::new(0.0, 1.0, 0.0),
        )));
        let obj = agg.object_capabilities();
        assert!(!obj.contains(ObjectCapabilities::BOUNDABLE));
    }

    #[test]
    fn test_inside_any_child() {
        let agg = two_spheres();

        assert!(agg.inside(&Point3::new(0.0, 0.0, -5.5)));
        assert!(!agg.inside(&Point3::origin()));
    }
}
