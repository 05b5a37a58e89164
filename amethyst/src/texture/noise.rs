use geo::{Coord2, Point3, Scalar, Vector3};
use noise::{NoiseFn, Perlin, Seedable};
use num_traits::ToPrimitive;

use crate::capabilities::MaterialCapabilities;
use crate::rgbcolor::{lerp, Rgbcolor};
use crate::texture::Texture;

/// A solid texture driven by Perlin noise: the noise value at the scaled
/// hit point picks a blend between two colors.
#[derive(Debug, Clone)]
pub struct NoiseTexture<T> {
    scale: T,
    c0: Rgbcolor<T>,
    c1: Rgbcolor<T>,
    noise: Perlin,
}

impl<T: Scalar> NoiseTexture<T> {
    pub fn new(c0: Rgbcolor<T>, c1: Rgbcolor<T>, scale: T) -> Self {
        NoiseTexture {
            scale,
            c0,
            c1,
            noise: Perlin::new(),
        }
    }

    pub fn with_seed(c0: Rgbcolor<T>, c1: Rgbcolor<T>, scale: T, seed: u32) -> Self {
        NoiseTexture {
            scale,
            c0,
            c1,
            noise: Perlin::new().set_seed(seed),
        }
    }

    fn color_at(&self, location: &Point3<T>) -> Rgbcolor<T> {
        let s = self.scale;
        let p = [
            (location.x * s).to_f64().unwrap_or(0.0),
            (location.y * s).to_f64().unwrap_or(0.0),
            (location.z * s).to_f64().unwrap_or(0.0),
        ];

        // noise is in [-1, 1], the interpolation parameter in [0, 1]
        let noisy = T::of((self.noise.get(p) + 1.0) / 2.0);

        lerp(noisy, self.c0, self.c1)
    }
}

impl<T: Scalar> Default for NoiseTexture<T> {
    fn default() -> Self {
        NoiseTexture::new(
            Rgbcolor::new(T::of(0.8), T::zero(), T::zero()),
            Rgbcolor::new(T::zero(), T::zero(), T::of(0.8)),
            T::one(),
        )
    }
}

impl<T: Scalar> Texture<T> for NoiseTexture<T> {
    fn get_color(
        &self,
        location: &Point3<T>,
        _uv: &Coord2<T>,
        _normal: &Vector3<T>,
    ) -> Rgbcolor<T> {
        self.color_at(location)
    }

    fn capabilities(&self) -> MaterialCapabilities {
        MaterialCapabilities::DIFFUSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_stays_between_endpoints() {
        let tex = NoiseTexture::with_seed(
            Rgbcolor::new(1.0, 0.0, 0.0),
            Rgbcolor::new(0.0, 0.0, 1.0),
            3.0,
            7,
        );

        for i in 0..50 {
            let p = Point3::new(i as f64 * 0.37, i as f64 * 0.11, -0.5 * i as f64);
            let c = tex.color_at(&p);

            assert!((0.0..=1.0).contains(&c.r));
            assert!(c.g.abs() < 1e-12);
            assert!((0.0..=1.0).contains(&c.b));
            assert!((c.r + c.b - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = NoiseTexture::with_seed(Rgbcolor::black(), Rgbcolor::white(), 1.0, 3);
        let b = NoiseTexture::with_seed(Rgbcolor::black(), Rgbcolor::white(), 1.0, 3);

        let p = Point3::new(1.3, -2.4, 0.9);
        assert_eq!(a.color_at(&p), b.color_at(&p));
    }
}
