//! Image file codecs and the color conversions they are built on.
//!
//! The PPM path is the human-readable ASCII "P3" flavor; TGA is the
//! uncompressed 24-bit type-2 flavor. Both readers reject malformed input
//! with a [`ParseError`](crate::ParseError); the convenience
//! [`load_image`] instead logs the failure and hands back an empty raster.

pub mod convert;
pub mod ppm;
pub mod tga;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use geo::Scalar;

use crate::error::{Error, ParseError, Result};
use crate::raster::Raster;
use crate::rgbcolor::Rgbcolor;

pub use convert::{color_from_bytes, color_to_bytes, gamma_convert};

/// Write a raster to the given path, picking the codec from the extension
/// (`.ppm` or `.tga`).
pub fn save_image<T: Scalar, P: AsRef<Path>>(
    path: P,
    image: &Raster<Rgbcolor<T>>,
) -> Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path).map_err(ParseError::from)?);

    match extension(path) {
        Some("tga") => tga::write_tga(&mut out, image),
        Some("ppm") => ppm::write_ppm(&mut out, image),
        _ => Err(Error::InvalidArgument(format!(
            "no codec for {}",
            path.display()
        ))),
    }
}

/// Load an image from the given path. A missing file or malformed contents
/// are diagnosed with a warning and produce an empty raster, per the loader
/// contract.
pub fn load_image<T: Scalar, P: AsRef<Path>>(path: P) -> Raster<Rgbcolor<T>> {
    let path = path.as_ref();

    match try_load_image(path) {
        Ok(image) => image,
        Err(e) => {
            log::warn!("could not load {}: {}", path.display(), e);
            Raster::default()
        }
    }
}

fn try_load_image<T: Scalar>(path: &Path) -> Result<Raster<Rgbcolor<T>>> {
    let mut input = BufReader::new(File::open(path).map_err(ParseError::from)?);

    match extension(path) {
        Some("tga") => tga::read_tga(&mut input),
        Some("ppm") => ppm::read_ppm(&mut input),
        _ => Err(Error::InvalidArgument(format!(
            "no codec for {}",
            path.display()
        ))),
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}
