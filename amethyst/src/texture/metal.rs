use geo::{Coord2, Point3, Scalar, UnitLine3, Vector3};
use rand::RngCore;

use crate::capabilities::MaterialCapabilities;
use crate::intersection::IntersectionInfo;
use crate::ray_parameters::RayParameters;
use crate::rgbcolor::Rgbcolor;
use crate::samplegen::random_in_unit_sphere;
use crate::texture::{Scatter, Texture};

/// A metallic surface: scatters like the lambertian but with the unit-ball
/// perturbation scaled by `fuzz`, clamped to `[0, 1]` at construction. Zero
/// fuzz leaves only the normal-biased bounce.
#[derive(Debug, Clone, PartialEq)]
pub struct Metal<T> {
    albedo: Rgbcolor<T>,
    fuzz: T,
}

impl<T: Scalar> Metal<T> {
    pub fn new(albedo: Rgbcolor<T>, fuzz: T) -> Self {
        Metal {
            albedo,
            fuzz: fuzz.max(T::zero()).min(T::one()),
        }
    }

    pub fn albedo(&self) -> Rgbcolor<T> {
        self.albedo
    }

    pub fn fuzz(&self) -> T {
        self.fuzz
    }
}

impl<T: Scalar> Texture<T> for Metal<T> {
    fn get_color(
        &self,
        _location: &Point3<T>,
        _uv: &Coord2<T>,
        _normal: &Vector3<T>,
    ) -> Rgbcolor<T> {
        Rgbcolor::black()
    }

    fn scatter_ray(
        &self,
        ray: &RayParameters<T>,
        intersection: &IntersectionInfo<T>,
        rng: &mut dyn RngCore,
    ) -> Option<Scatter<T>> {
        let mut scattered = ray.perfect_reflection(intersection)?;

        let p = intersection.first_point()?;
        let n = intersection.normal()?;
        let target = p + n + Vector3::from(random_in_unit_sphere::<T, _>(rng)) * self.fuzz;

        scattered.set_line(UnitLine3::new(p, target - p));

        Some(Scatter {
            ray: scattered,
            attenuation: self.albedo,
        })
    }

    fn capabilities(&self) -> MaterialCapabilities {
        MaterialCapabilities::DIFFUSE | MaterialCapabilities::REFLECTIVE
    }
}
