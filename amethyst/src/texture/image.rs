use geo::{Coord2, Point3, Scalar, Vector3};
use num_traits::ToPrimitive;

use crate::capabilities::MaterialCapabilities;
use crate::raster::Raster;
use crate::rgbcolor::Rgbcolor;
use crate::texture::Texture;

/// A texture sampled from a raster by the hit's `(u, v)` coordinates.
///
/// `u` runs left to right and `v` bottom to top, so `v` is flipped against
/// the raster's top-down rows. Lookup is nearest-pixel. An empty raster
/// (e.g. from a failed load) renders black.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTexture<T> {
    image: Raster<Rgbcolor<T>>,
}

impl<T: Scalar> ImageTexture<T> {
    pub fn new(image: Raster<Rgbcolor<T>>) -> Self {
        ImageTexture { image }
    }

    fn lookup(&self, uv: &Coord2<T>) -> Rgbcolor<T> {
        if self.image.is_empty() {
            return Rgbcolor::black();
        }

        let clamp01 = |v: T| v.max(T::zero()).min(T::one());

        let x = clamp01(uv.x) * T::of((self.image.width() - 1) as f64);
        let y = (T::one() - clamp01(uv.y)) * T::of((self.image.height() - 1) as f64);

        let x = x.to_usize().unwrap_or(0);
        let y = y.to_usize().unwrap_or(0);

        self.image.get(x, y).copied().unwrap_or_else(|_| Rgbcolor::black())
    }
}

impl<T: Scalar> Texture<T> for ImageTexture<T> {
    fn get_color(
        &self,
        _location: &Point3<T>,
        uv: &Coord2<T>,
        _normal: &Vector3<T>,
    ) -> Rgbcolor<T> {
        self.lookup(uv)
    }

    fn capabilities(&self) -> MaterialCapabilities {
        MaterialCapabilities::DIFFUSE
    }
}
