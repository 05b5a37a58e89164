use geo::{Coord2, Point3, Scalar, UnitLine3, Vector3};
use rand::RngCore;

use crate::capabilities::MaterialCapabilities;
use crate::intersection::IntersectionInfo;
use crate::ray_parameters::RayParameters;
use crate::rgbcolor::Rgbcolor;
use crate::samplegen::random_in_unit_sphere;
use crate::texture::{Scatter, Texture};

/// An ideal diffuse surface.
///
/// Scattering aims at `hit + normal + s` for a unit-ball sample `s`, which
/// gives the cosine-weighted hemisphere distribution; the local color is
/// black because all the lambertian contributes is attenuated bounce light.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambertian<T> {
    albedo: Rgbcolor<T>,
}

impl<T: Scalar> Lambertian<T> {
    pub fn new(albedo: Rgbcolor<T>) -> Self {
        Lambertian { albedo }
    }

    pub fn albedo(&self) -> Rgbcolor<T> {
        self.albedo
    }
}

impl<T: Scalar> Texture<T> for Lambertian<T> {
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
        let target = p + n + Vector3::from(random_in_unit_sphere::<T, _>(rng));

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

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;

    #[test]
    fn test_scatter_points_away_from_surface() {
        let texture = Lambertian::new(Rgbcolor::new(0.5, 0.5, 0.5));
        let mut rng = XorShiftRng::seed_from_u64(0);

        let ray = RayParameters::new(UnitLine3::new(
            Point3::new(0.0, 2.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
        ));

        let mut info = IntersectionInfo::new();
        info.set_first_point(Point3::origin());
        info.set_normal(Vector3::new(0.0, 1.0, 0.0));

        for _ in 0..32 {
            let scatter = texture.scatter_ray(&ray, &info, &mut rng).unwrap();

            assert_eq!(scatter.attenuation, Rgbcolor::new(0.5, 0.5, 0.5));
            assert_eq!(scatter.ray.line().origin(), Point3::origin());
            // the target lies in the ball around hit + normal, strictly
            // above the surface
            assert!(scatter.ray.line().direction().y > 0.0);
        }
    }

    #[test]
    fn test_no_scatter_without_hit_data() {
        let texture = Lambertian::new(Rgbcolor::white());
        let mut rng = XorShiftRng::seed_from_u64(0);

        let ray = RayParameters::new(UnitLine3::new(
            Point3::origin(),
            Vector3::new(0.0, 0.0, -1.0),
        ));

        assert!(texture
            .scatter_ray(&ray, &IntersectionInfo::new(), &mut rng)
            .is_none());
    }
}
