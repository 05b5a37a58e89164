use std::io::{BufRead, Write};

use geo::Scalar;

use crate::error::{ParseError, Result};
use crate::io::convert::{color_from_bytes, color_to_bytes};
use crate::raster::Raster;
use crate::rgbcolor::Rgbcolor;

/// Write the ASCII "P3" flavor of PPM: `P3\n<w> <h>\n255\n`, then one `R G
/// B` triplet per pixel, one row of pixels per line.
pub fn write_ppm<T: Scalar, W: Write>(out: &mut W, source: &Raster<Rgbcolor<T>>) -> Result<()> {
    let write = |e: std::io::Error| ParseError::from(e);

    write!(out, "P3\n{} {}\n255\n", source.width(), source.height()).map_err(write)?;

    for y in 0..source.height() {
        let row = source.row(y)?;
        for (x, pixel) in row.iter().enumerate() {
            if x != 0 {
                write!(out, " ").map_err(write)?;
            }

            let c = color_to_bytes(pixel);
            write!(out, "{} {} {}", c.r, c.g, c.b).map_err(write)?;
        }
        writeln!(out).map_err(write)?;
    }

    Ok(())
}

/// Read a "P3" PPM. Tolerates any amount of whitespace and `#` comments;
/// a bad magic, a maximum value other than 255, or missing samples are a
/// [`ParseError`].
pub fn read_ppm<T: Scalar, R: BufRead>(input: &mut R) -> Result<Raster<Rgbcolor<T>>> {
    let mut text = String::new();
    input.read_to_string(&mut text).map_err(ParseError::from)?;

    // Strip comments before tokenizing.
    let mut tokens = text
        .lines()
        .map(|l| l.split('#').next().unwrap_or(""))
        .flat_map(|l| l.split_whitespace())
        .map(str::to_owned)
        .collect::<Vec<_>>()
        .into_iter();

    let magic = tokens.next().ok_or(ParseError::Truncated)?;
    if magic != "P3" {
        return Err(ParseError::BadMagic {
            expected: "P3".to_owned(),
            found: magic,
        }
        .into());
    }

    let width = next_number(&mut tokens)?;
    let height = next_number(&mut tokens)?;

    let max = next_number(&mut tokens)?;
    if max != 255 {
        return Err(ParseError::BadConstant {
            name: "maximum sample value",
            value: max as i64,
        }
        .into());
    }

    let mut image = Raster::new(width, height);
    for (_, _, pixel) in image.pixels_mut() {
        let bytes = Rgbcolor {
            r: next_number(&mut tokens)? as u8,
            g: next_number(&mut tokens)? as u8,
            b: next_number(&mut tokens)? as u8,
        };
        *pixel = color_from_bytes(&bytes);
    }

    Ok(image)
}

fn next_number(tokens: &mut impl Iterator<Item = String>) -> Result<usize> {
    let token = tokens.next().ok_or(ParseError::Truncated)?;

    token.parse::<usize>().map_err(|_| {
        ParseError::BadMagic {
            expected: "a number".to_owned(),
            found: token,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_round_trip() {
        let mut image = Raster::<Rgbcolor<f64>>::new(2, 1);
        image.set(0, 0, Rgbcolor::new(1.0, 0.0, 0.0)).unwrap();
        image.set(1, 0, Rgbcolor::new(0.0, 1.0, 0.0)).unwrap();

        let mut bytes = Vec::new();
        write_ppm(&mut bytes, &image).unwrap();

        let reread: Raster<Rgbcolor<f64>> = read_ppm(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(reread.width(), 2);
        assert_eq!(reread.height(), 1);

        for (x, y, expected) in image.pixels() {
            let got = reread.get(x, y).unwrap();
            assert!((got.r - expected.r).abs() < 1.0 / 255.0);
            assert!((got.g - expected.g).abs() < 1.0 / 255.0);
            assert!((got.b - expected.b).abs() < 1.0 / 255.0);
        }
    }

    #[test]
    fn test_header_format() {
        let mut image = Raster::<Rgbcolor<f64>>::new(2, 2);
        image.set(0, 0, Rgbcolor::white()).unwrap();

        let mut bytes = Vec::new();
        write_ppm(&mut bytes, &image).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("2 2"));
        assert_eq!(lines.next(), Some("255"));
        assert_eq!(lines.next(), Some("255 255 255 0 0 0"));
        assert_eq!(lines.next(), Some("0 0 0 0 0 0"));
    }

    #[test]
    fn test_comments_and_whitespace() {
        let text = "P3 # the ascii flavor\n2 1\n255\n255 0 0\n0 255 0\n";
        let image: Raster<Rgbcolor<f64>> = read_ppm(&mut Cursor::new(text)).unwrap();

        assert_eq!(image.width(), 2);
        assert!((image.get(0, 0).unwrap().r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bad_magic() {
        let r: Result<Raster<Rgbcolor<f64>>> = read_ppm(&mut Cursor::new("P6 1 1 255 1 2 3"));
        assert!(r.is_err());
    }

    #[test]
    fn test_truncated() {
        let r: Result<Raster<Rgbcolor<f64>>> = read_ppm(&mut Cursor::new("P3 2 2 255 1 2 3"));
        assert!(r.is_err());
    }

    #[test]
    fn test_bad_max_value() {
        let r: Result<Raster<Rgbcolor<f64>>> = read_ppm(&mut Cursor::new("P3 1 1 65535 1 2 3"));
        assert!(r.is_err());
    }
}
