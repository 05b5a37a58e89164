use geo::{Coord2, Frame, Point3, Scalar, UnitLine3, Vector3};

use crate::shapes::Shape;

/// The accumulator filled in by intersection queries.
///
/// Every field starts absent; the shape being tested (or an aggregate
/// combining child results) fills in exactly what the query's requirements
/// asked for. The record never owns anything: the shape back-reference is
/// a borrow into the scene graph, valid for the duration of the render.
#[derive(Debug, Clone)]
pub struct IntersectionInfo<'a, T> {
    shape: Option<&'a dyn Shape<T>>,
    first_distance: Option<T>,
    first_point: Option<Point3<T>>,
    normal: Option<Vector3<T>>,
    uv: Option<Coord2<T>>,
    local_system: Option<Frame<T>>,
    containers: Vec<&'a dyn Shape<T>>,
    all_hits: Vec<IntersectionInfo<'a, T>>,
    ray: Option<UnitLine3<T>>,
}

impl<'a, T> Default for IntersectionInfo<'a, T> {
    fn default() -> Self {
        IntersectionInfo {
            shape: None,
            first_distance: None,
            first_point: None,
            normal: None,
            uv: None,
            local_system: None,
            containers: Vec::new(),
            all_hits: Vec::new(),
            ray: None,
        }
    }
}

impl<'a, T: Scalar> IntersectionInfo<'a, T> {
    pub fn new() -> Self {
        IntersectionInfo::default()
    }

    pub fn have_shape(&self) -> bool {
        self.shape.is_some()
    }

    pub fn have_distance(&self) -> bool {
        self.first_distance.is_some()
    }

    pub fn have_normal(&self) -> bool {
        self.normal.is_some()
    }

    pub fn have_uv(&self) -> bool {
        self.uv.is_some()
    }

    pub fn shape(&self) -> Option<&'a dyn Shape<T>> {
        self.shape
    }

    pub fn first_distance(&self) -> Option<T> {
        self.first_distance
    }

    pub fn first_point(&self) -> Option<Point3<T>> {
        self.first_point
    }

    pub fn normal(&self) -> Option<Vector3<T>> {
        self.normal
    }

    pub fn uv(&self) -> Option<Coord2<T>> {
        self.uv
    }

    pub fn local_system(&self) -> Option<Frame<T>> {
        self.local_system
    }

    pub fn ray(&self) -> Option<UnitLine3<T>> {
        self.ray
    }

    /// The aggregates the hit lies inside, innermost first.
    pub fn containers(&self) -> &[&'a dyn Shape<T>] {
        &self.containers
    }

    /// All sub-hits along the ray; only populated when the query asked for
    /// every hit.
    pub fn all_hits(&self) -> &[IntersectionInfo<'a, T>] {
        &self.all_hits
    }

    pub fn set_shape(&mut self, shape: &'a dyn Shape<T>) {
        self.shape = Some(shape);
    }

    pub fn set_first_distance(&mut self, distance: T) {
        self.first_distance = Some(distance);
    }

    pub fn set_first_point(&mut self, point: Point3<T>) {
        self.first_point = Some(point);
    }

    pub fn set_normal(&mut self, normal: Vector3<T>) {
        self.normal = Some(normal);
    }

    pub fn set_uv(&mut self, uv: Coord2<T>) {
        self.uv = Some(uv);
    }

    pub fn set_local_system(&mut self, frame: Frame<T>) {
        self.local_system = Some(frame);
    }

    pub fn set_ray(&mut self, ray: UnitLine3<T>) {
        self.ray = Some(ray);
    }

    pub fn append_container(&mut self, container: &'a dyn Shape<T>) {
        self.containers.push(container);
    }

    pub fn append_intersection(&mut self, hit: IntersectionInfo<'a, T>) {
        self.all_hits.push(hit);
    }
}
