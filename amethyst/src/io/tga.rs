use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use geo::Scalar;

use crate::error::{ParseError, Result};
use crate::io::convert::{color_from_bytes, color_to_bytes};
use crate::raster::Raster;
use crate::rgbcolor::Rgbcolor;

// Image type 2: uncompressed RGB.
const TGA_TYPE_RGB: u8 = 2;
// Descriptor bit 5 set: rows run from the top down.
const TGA_ORIGIN_TOP_LEFT: u8 = 32;

/// Write an uncompressed 24-bit TGA with a top-left origin. Pixels go out
/// in B, G, R order.
pub fn write_tga<T: Scalar, W: Write>(out: &mut W, source: &Raster<Rgbcolor<T>>) -> Result<()> {
    let io = |e: std::io::Error| ParseError::from(e);

    let header: [u8; 12] = [
        0,            // length of the identifier string
        0,            // color map type (0 = none)
        TGA_TYPE_RGB, // image type
        0, 0,         // first color map entry
        0, 0,         // color map length
        0,            // color map entry size
        0, 0,         // x origin
        0, 0,         // y origin
    ];
    out.write_all(&header).map_err(io)?;

    out.write_u16::<LittleEndian>(source.width() as u16).map_err(io)?;
    out.write_u16::<LittleEndian>(source.height() as u16).map_err(io)?;
    out.write_all(&[24, TGA_ORIGIN_TOP_LEFT]).map_err(io)?;

    for y in 0..source.height() {
        for pixel in source.row(y)? {
            let c = color_to_bytes(pixel);
            out.write_all(&[c.b, c.g, c.r]).map_err(io)?;
        }
    }

    Ok(())
}

/// Read an uncompressed 24-bit TGA. A descriptor of 0 marks a bottom-left
/// origin, in which case the rows are flipped on load.
pub fn read_tga<T: Scalar, R: Read>(input: &mut R) -> Result<Raster<Rgbcolor<T>>> {
    let io = |e: std::io::Error| ParseError::from(e);

    let mut skipped = [0u8; 2];
    input.read_exact(&mut skipped).map_err(io)?;

    let image_type = input.read_u8().map_err(io)?;
    if image_type != TGA_TYPE_RGB {
        return Err(ParseError::BadConstant {
            name: "image type",
            value: image_type as i64,
        }
        .into());
    }

    let mut color_map = [0u8; 9];
    input.read_exact(&mut color_map).map_err(io)?;

    let width = input.read_u16::<LittleEndian>().map_err(io)? as usize;
    let height = input.read_u16::<LittleEndian>().map_err(io)? as usize;

    let pixel_size = input.read_u8().map_err(io)?;
    let descriptor = input.read_u8().map_err(io)?;
    if pixel_size != 24 {
        return Err(ParseError::BadConstant {
            name: "pixel size",
            value: pixel_size as i64,
        }
        .into());
    }
    let flip_y = match descriptor {
        TGA_ORIGIN_TOP_LEFT => false,
        0 => true,
        other => {
            return Err(ParseError::BadConstant {
                name: "descriptor",
                value: other as i64,
            }
            .into())
        }
    };

    let mut image = Raster::new(width, height);
    for y in 0..height {
        let y_pos = if flip_y { height - 1 - y } else { y };

        for x in 0..width {
            let mut bgr = [0u8; 3];
            input.read_exact(&mut bgr).map_err(|_| ParseError::Truncated)?;

            let bytes = Rgbcolor {
                r: bgr[2],
                g: bgr[1],
                b: bgr[0],
            };
            image.set(x, y_pos, color_from_bytes(&bytes))?;
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn two_tone() -> Raster<Rgbcolor<f64>> {
        let mut image = Raster::new(2, 2);
        image.set(0, 0, Rgbcolor::new(1.0, 0.0, 0.0)).unwrap();
        image.set(1, 1, Rgbcolor::new(0.0, 0.0, 1.0)).unwrap();
        image
    }

    #[test]
    fn test_header_layout() {
        let mut bytes = Vec::new();
        write_tga(&mut bytes, &two_tone()).unwrap();

        assert_eq!(bytes.len(), 18 + 4 * 3);
        assert_eq!(bytes[2], 2); // type 2, RGB
        assert_eq!(&bytes[12..14], &[2, 0]); // width, little endian
        assert_eq!(&bytes[14..16], &[2, 0]); // height
        assert_eq!(bytes[16], 24); // pixel size
        assert_eq!(bytes[17], 32); // top-left origin

        // first pixel is red, stored b, g, r
        assert_eq!(&bytes[18..21], &[0, 0, 255]);
    }

    #[test]
    fn test_round_trip() {
        let image = two_tone();

        let mut bytes = Vec::new();
        write_tga(&mut bytes, &image).unwrap();

        let reread: Raster<Rgbcolor<f64>> = read_tga(&mut Cursor::new(bytes)).unwrap();
        for (x, y, expected) in image.pixels() {
            let got = reread.get(x, y).unwrap();
            assert!((got.r - expected.r).abs() < 1.0 / 255.0);
            assert!((got.b - expected.b).abs() < 1.0 / 255.0);
        }
    }

    #[test]
    fn test_bottom_origin_is_flipped() {
        let mut bytes = Vec::new();
        write_tga(&mut bytes, &two_tone()).unwrap();

        // rewrite the descriptor to claim a bottom-left origin
        bytes[17] = 0;

        let reread: Raster<Rgbcolor<f64>> = read_tga(&mut Cursor::new(bytes)).unwrap();

        // the red pixel that was at (0, 0) now reads back at (0, 1)
        assert!((reread.get(0, 1).unwrap().r - 1.0).abs() < 1e-9);
        assert!(reread.get(0, 0).unwrap().r < 1e-9);
    }

    #[test]
    fn test_bad_image_type() {
        let mut bytes = Vec::new();
        write_tga(&mut bytes, &two_tone()).unwrap();
        bytes[2] = 10;

        let r: Result<Raster<Rgbcolor<f64>>> = read_tga(&mut Cursor::new(bytes));
        assert!(r.is_err());
    }

    #[test]
    fn test_truncated_pixels() {
        let mut bytes = Vec::new();
        write_tga(&mut bytes, &two_tone()).unwrap();
        bytes.truncate(20);

        let r: Result<Raster<Rgbcolor<f64>>> = read_tga(&mut Cursor::new(bytes));
        assert!(r.is_err());
    }
}
