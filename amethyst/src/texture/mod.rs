//! The material contract coupling surface hits to colors and outgoing rays.

pub mod image;
pub mod lambertian;
pub mod marble;
pub mod metal;
pub mod noise;
pub mod solid;

use std::fmt::Debug;

use geo::{Coord2, Point3, Scalar, Vector3};
use rand::RngCore;

use crate::capabilities::MaterialCapabilities;
use crate::intersection::IntersectionInfo;
use crate::ray_parameters::RayParameters;
use crate::rgbcolor::Rgbcolor;

pub use self::image::ImageTexture;
pub use self::lambertian::Lambertian;
pub use self::marble::MarbleTexture;
pub use self::metal::Metal;
pub use self::noise::NoiseTexture;
pub use self::solid::Solid;

/// The ray a texture sends back out of a hit, with the color it is
/// attenuated by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter<T> {
    pub ray: RayParameters<T>,
    pub attenuation: Rgbcolor<T>,
}

pub trait Texture<T: Scalar>: Debug + Send + Sync {
    /// The emissive/diffuse color at a shading point.
    fn get_color(
        &self,
        location: &Point3<T>,
        uv: &Coord2<T>,
        normal: &Vector3<T>,
    ) -> Rgbcolor<T>;

    /// Produce the next ray for an intersection, or `None` to terminate
    /// recursion along this path. The RNG is the caller's; textures hold no
    /// mutable state of their own.
    fn scatter_ray(
        &self,
        ray: &RayParameters<T>,
        intersection: &IntersectionInfo<T>,
        rng: &mut dyn RngCore,
    ) -> Option<Scatter<T>> {
        let _ = (ray, intersection, rng);
        None
    }

    fn capabilities(&self) -> MaterialCapabilities;
}
