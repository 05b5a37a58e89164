use geo::{Coord2, Point3, Scalar, Vector3};
use noise::{NoiseFn, Perlin, Seedable};
use num_traits::ToPrimitive;

use crate::capabilities::MaterialCapabilities;
use crate::rgbcolor::{lerp, Rgbcolor};
use crate::texture::Texture;

/// Marble: sine bands along x, displaced by noise turbulence, shaded
/// through a three-color ramp from vein to base color.
#[derive(Debug, Clone)]
pub struct MarbleTexture<T> {
    // band frequency, pi / line_width
    freq: T,
    scale: T,
    octaves: u32,
    colors: [Rgbcolor<T>; 3],
    noise: Perlin,
}

impl<T: Scalar> MarbleTexture<T> {
    pub fn new(line_width: T, scale: T, octaves: u32) -> Self {
        MarbleTexture {
            freq: T::of(std::f64::consts::PI) / line_width,
            scale,
            octaves,
            colors: [
                Rgbcolor::new(T::of(0.06), T::of(0.04), T::of(0.02)),
                Rgbcolor::new(T::of(0.4), T::of(0.2), T::of(0.1)),
                Rgbcolor::new(T::of(0.8), T::of(0.8), T::of(0.8)),
            ],
            noise: Perlin::new(),
        }
    }

    pub fn with_colors(
        c0: Rgbcolor<T>,
        c1: Rgbcolor<T>,
        c2: Rgbcolor<T>,
        line_width: T,
        scale: T,
        octaves: u32,
    ) -> Self {
        MarbleTexture {
            freq: T::of(std::f64::consts::PI) / line_width,
            scale,
            octaves,
            colors: [c0, c1, c2],
            noise: Perlin::new(),
        }
    }

    pub fn with_seed(line_width: T, scale: T, octaves: u32, seed: u32) -> Self {
        let mut t = MarbleTexture::new(line_width, scale, octaves);
        t.noise = Perlin::new().set_seed(seed);
        t
    }

    /// Classic turbulence: absolute noise summed over octaves of doubling
    /// frequency and halving amplitude.
    fn turbulence(&self, p: [f64; 3]) -> f64 {
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut q = p;

        for _ in 0..self.octaves {
            sum += self.noise.get(q).abs() * amplitude;
            amplitude *= 0.5;
            q = [q[0] * 2.0, q[1] * 2.0, q[2] * 2.0];
        }

        sum
    }

    fn color_at(&self, location: &Point3<T>) -> Rgbcolor<T> {
        let f = self.freq;
        let p = [
            (location.x * f).to_f64().unwrap_or(0.0),
            (location.y * f).to_f64().unwrap_or(0.0),
            (location.z * f).to_f64().unwrap_or(0.0),
        ];

        let turb = self.scale.to_f64().unwrap_or(0.0) * self.turbulence(p);
        // The absolute value in the turbulence gives nice sharp edges on
        // the dark side of each vein.
        let value = ((p[0] + turb).sin() + 1.0) / 2.0;

        self.ramp(T::of(value))
    }

    fn ramp(&self, t: T) -> Rgbcolor<T> {
        let half = T::of(0.5);
        let two = T::of(2.0);

        if t < half {
            lerp(t * two, self.colors[0], self.colors[1])
        } else {
            lerp((t - half) * two, self.colors[1], self.colors[2])
        }
    }
}

impl<T: Scalar> Texture<T> for MarbleTexture<T> {
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
    fn test_ramp_endpoints() {
        let t = MarbleTexture::<f64>::new(0.5, 1.0, 4);

        assert_eq!(t.ramp(0.0), t.colors[0]);
        assert_eq!(t.ramp(0.5), t.colors[1]);
        assert_eq!(t.ramp(1.0), t.colors[2]);
    }

    #[test]
    fn test_colors_stay_in_ramp_range() {
        let t = MarbleTexture::<f64>::with_seed(0.5, 1.0, 8, 11);

        for i in 0..50 {
            let p = Point3::new(0.21 * i as f64, -0.4 * i as f64, 1.7);
            let c = t.color_at(&p);

            assert!(c.r >= t.colors[0].r - 1e-9 && c.r <= t.colors[2].r + 1e-9);
        }
    }

    #[test]
    fn test_turbulence_is_nonnegative() {
        let t = MarbleTexture::<f64>::with_seed(0.5, 1.0, 8, 11);

        for i in 0..20 {
            assert!(t.turbulence([0.3 * i as f64, 0.1, -0.7]) >= 0.0);
        }
    }
}
