//! The primitive shapes and their composite.
//!
//! Everything renderable implements [`Shape`], the uniform intersection
//! contract: queries declare what they need through
//! [`IntersectionRequirements`], shapes fill an
//! [`IntersectionInfo`](crate::IntersectionInfo) with exactly that, and a
//! query forcing something a shape cannot compute fails with the record
//! untouched.

pub mod aggregate;
pub mod disc;
pub mod plane;
pub mod rectangle;
pub mod sphere;
pub mod triangle;

use std::fmt::Debug;
use std::sync::Arc;

use geo::{Point3, Scalar, UnitLine3};

use crate::capabilities::{IntersectionCapabilities, ObjectCapabilities};
use crate::intersection::IntersectionInfo;
use crate::ray_parameters::RayParameters;
use crate::requirements::IntersectionRequirements;

pub use aggregate::Aggregate;
pub use disc::Disc;
pub use plane::Plane;
pub use rectangle::Rectangle;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// A shared handle to a shape; children may be co-owned by several
/// aggregates and shared freely across render threads.
pub type ShapeRef<T> = Arc<dyn Shape<T>>;

pub trait Shape<T: Scalar>: Debug + Send + Sync {
    /// Epsilon-tolerant containment test.
    fn inside(&self, p: &Point3<T>) -> bool;

    /// Coarse overlap test against a sphere, used for bounding checks.
    fn intersects_sphere(&self, s: &Sphere<T>) -> bool;

    /// Coarse overlap test against a plane.
    fn intersects_plane(&self, p: &Plane<T>) -> bool;

    /// Intersect a unit line against this shape.
    ///
    /// On success the shape, nearest distance, hit point and ray are always
    /// set, plus whatever else `requirements` forces. The reported distance
    /// is in the unit line's parameter domain.
    fn intersects_line<'a>(
        &'a self,
        line: &UnitLine3<T>,
        info: &mut IntersectionInfo<'a, T>,
        requirements: &IntersectionRequirements,
    ) -> bool;

    /// Same contract as [`intersects_line`](Shape::intersects_line); the ray
    /// variant carries a time that time-sampling shapes may consult.
    fn intersects_ray<'a>(
        &'a self,
        ray: &RayParameters<T>,
        info: &mut IntersectionInfo<'a, T>,
        requirements: &IntersectionRequirements,
    ) -> bool {
        self.intersects_line(ray.line(), info, requirements)
    }

    /// The fastest path: nothing but the distance is produced. Most useful
    /// for shadow tests where no texturing will happen.
    fn quick_intersection(&self, line: &UnitLine3<T>, time: T, distance: &mut T) -> bool;

    fn intersection_capabilities(&self) -> IntersectionCapabilities;

    fn object_capabilities(&self) -> ObjectCapabilities;

    fn name(&self) -> &'static str;

    /// The shape's fields rendered one per line for debugging, optionally
    /// prefixed with the shape's name.
    fn internal_members(&self, indentation: &str, prefix_with_classname: bool) -> String;

    fn describe(&self, indentation: &str) -> String {
        format!(
            "{ind}{}\n{ind}{{\n{}{ind}}}",
            self.name(),
            self.internal_members(&format!("{ind}  ", ind = indentation), false),
            ind = indentation,
        )
    }
}
