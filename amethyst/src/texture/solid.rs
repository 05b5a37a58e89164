use geo::{Coord2, Point3, Scalar, Vector3};

use crate::capabilities::MaterialCapabilities;
use crate::rgbcolor::Rgbcolor;
use crate::texture::Texture;

/// A single color everywhere; never scatters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid<T> {
    color: Rgbcolor<T>,
}

impl<T: Scalar> Solid<T> {
    pub fn new(color: Rgbcolor<T>) -> Self {
        Solid { color }
    }
}

impl<T: Scalar> Texture<T> for Solid<T> {
    fn get_color(
        &self,
        _location: &Point3<T>,
        _uv: &Coord2<T>,
        _normal: &Vector3<T>,
    ) -> Rgbcolor<T> {
        self.color
    }

    fn capabilities(&self) -> MaterialCapabilities {
        MaterialCapabilities::DIFFUSE
    }
}
