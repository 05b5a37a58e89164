//! Scanline rasterization of alpha-blended triangles, in the manner of
//! Bresenham's line drawing: per-y gradients along the triangle edges, a
//! horizontal span per scanline, per-pixel color and alpha interpolation
//! along the span.

use geo::{Coord2, Scalar};
use num_traits::ToPrimitive;

use crate::raster::Raster;
use crate::rgbcolor::Rgbcolor;

/// A 2D vertex in pixel space with a color and a transparency. Alpha runs
/// backwards: 0 is fully opaque, 1 fully transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaVertex<T> {
    pub xy: Coord2<T>,
    pub rgb: Rgbcolor<T>,
    pub alpha: T,
}

impl<T: Scalar> AlphaVertex<T> {
    pub fn new(xy: Coord2<T>, rgb: Rgbcolor<T>, alpha: T) -> Self {
        AlphaVertex { xy, rgb, alpha }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaTriangle<T> {
    pub v1: AlphaVertex<T>,
    pub v2: AlphaVertex<T>,
    pub v3: AlphaVertex<T>,
}

fn sort_by_y<T: Scalar>(p1: &mut AlphaVertex<T>, p2: &mut AlphaVertex<T>) {
    if p2.xy.y < p1.xy.y {
        std::mem::swap(p1, p2);
    }
}

fn blend_pixel<T: Scalar>(
    pixels: &mut [Rgbcolor<T>],
    width: usize,
    x: usize,
    y: usize,
    c: &Rgbcolor<T>,
    alpha: T,
) {
    let existing = &mut pixels[y * width + x];
    let a1 = T::one() - alpha;
    existing.set(
        existing.r * alpha + c.r * a1,
        existing.g * alpha + c.g * a1,
        existing.b * alpha + c.b * a1,
    );
}

/// Draw one horizontal span with color and alpha interpolated between the
/// endpoints. Bounds clipping happens once here, not per pixel. With
/// `swap_x_and_y` the span is actually vertical and every write swaps the
/// coordinates back.
#[allow(clippy::too_many_arguments)]
fn draw_horizontal_line<T: Scalar>(
    pixels: &mut [Rgbcolor<T>],
    width: usize,
    height: usize,
    mut x1: T,
    mut x2: T,
    y: T,
    mut c1: Rgbcolor<T>,
    mut c2: Rgbcolor<T>,
    mut a1: T,
    mut a2: T,
    swap_x_and_y: bool,
) {
    let y_limit = if swap_x_and_y { width } else { height };
    if y < T::zero() || y.to_usize().unwrap_or(usize::MAX) >= y_limit {
        return;
    }
    let y = y.to_usize().unwrap_or(0);

    let mut dx = x2 - x1;
    if dx < T::zero() {
        std::mem::swap(&mut x1, &mut x2);
        std::mem::swap(&mut c1, &mut c2);
        std::mem::swap(&mut a1, &mut a2);
        dx = x2 - x1;
    }
    if x2 < T::zero() {
        return;
    }

    let a_dx = (a2 - a1) / dx;
    let c_dx = (c2 - c1) * (T::one() / dx);

    let mut a = a1;
    let mut c = c1;

    if x1 < T::zero() {
        a = a1 - x1 * a_dx;
        c = c1 - c_dx * x1;
        x1 = T::zero();
    }
    let x_limit = if swap_x_and_y { height } else { width };
    let half = T::of(0.5);
    if x2 + half >= T::of(x_limit as f64) {
        x2 = T::of((x_limit - 1) as f64);
    }

    let start = (x1 + half).to_usize().unwrap_or(0);
    let end = (x2 + half).to_usize().unwrap_or(0);
    for x in start..=end {
        if swap_x_and_y {
            blend_pixel(pixels, width, y, x, &c, a);
        } else {
            blend_pixel(pixels, width, x, y, &c, a);
        }
        a = a + a_dx;
        c += c_dx;
    }
}

/// Rasterize an alpha-blended triangle into the raster, one sample per
/// pixel.
pub fn dda_rasterize_triangle<T: Scalar>(img: &mut Raster<Rgbcolor<T>>, tri: &AlphaTriangle<T>) {
    let width = img.width();
    let height = img.height();
    if width == 0 || height == 0 {
        return;
    }

    let mut p1 = tri.v1;
    let mut p2 = tri.v2;
    let mut p3 = tri.v3;

    // Sort the three points by y with three compare/swap operations.
    sort_by_y(&mut p1, &mut p2);
    sort_by_y(&mut p2, &mut p3);
    sort_by_y(&mut p1, &mut p2);

    // A flat top ((p2.y - p1.y) < 1) starves the edge gradients. Swapping x
    // and y for all three points sidesteps it; every pixel write swaps
    // back. No need to consider (p3.x - p1.x) < 1 as well, that would be a
    // degenerate triangle.
    let mut swap_x_and_y = false;
    if (p2.xy.y - p1.xy.y).abs() < T::one() {
        swap_x_and_y = true;
        for p in [&mut p1, &mut p2, &mut p3] {
            std::mem::swap(&mut p.xy.x, &mut p.xy.y);
        }

        sort_by_y(&mut p1, &mut p2);
        sort_by_y(&mut p2, &mut p3);
        sort_by_y(&mut p1, &mut p2);
    }

    let dp1 = p2.xy - p1.xy;
    let dp2 = p3.xy - p1.xy;
    let da1 = p2.alpha - p1.alpha;
    let da2 = p3.alpha - p1.alpha;
    let dc1 = p2.rgb - p1.rgb;
    let dc2 = p3.rgb - p1.rgb;

    // Two segments: scanlines between p1.y and p2.y walk the long edge
    // p1->p3 and the short edge p1->p2; between p2.y and p3.y the short
    // edge is p2->p3.
    let dp1_dy = dp1 / dp1.y;
    let dp2_dy = dp2 / dp2.y;
    let dc1_dy = dc1 * (T::one() / dp1.y);
    let dc2_dy = dc2 * (T::one() / dp2.y);
    let da1_dy = da1 / dp1.y;
    let da2_dy = da2 / dp2.y;

    let pixels = img.as_mut_slice();

    let mut y = p1.xy.y;
    let mut x1 = p1.xy.x;
    let mut x2 = x1;
    let mut a1 = p1.alpha;
    let mut a2 = a1;
    let mut c1 = p1.rgb;
    let mut c2 = c1;

    if y < p2.xy.y {
        while y <= p2.xy.y {
            draw_horizontal_line(
                pixels, width, height, x1, x2, y, c1, c2, a1, a2, swap_x_and_y,
            );

            x1 = x1 + dp1_dy.x;
            x2 = x2 + dp2_dy.x;
            a1 = a1 + da1_dy;
            a2 = a2 + da2_dy;
            c1 += dc1_dy;
            c2 += dc2_dy;
            y = y + T::one();
        }
    }

    if y < p3.xy.y {
        let dp3 = p3.xy - p2.xy;
        let dc3 = p3.rgb - p2.rgb;
        let da3 = p3.alpha - p2.alpha;
        let dp3_dy = dp3 / dp3.y;
        let dc3_dy = dc3 * (T::one() / dp3.y);
        let da3_dy = da3 / dp3.y;

        // Restart the short edge from p2, compensating for the fractional
        // scanline overshoot of the first segment.
        x1 = p3.xy.x + (y - p3.xy.y) * dp3_dy.x;
        a1 = p2.alpha + (y - p2.xy.y) * da3_dy;
        c1 = p2.rgb + dc3_dy * (y - p2.xy.y);

        while y <= p3.xy.y {
            draw_horizontal_line(
                pixels, width, height, x1, x2, y, c1, c2, a1, a2, swap_x_and_y,
            );

            x1 = x1 + dp3_dy.x;
            x2 = x2 + dp2_dy.x;
            a1 = a1 + da3_dy;
            a2 = a2 + da2_dy;
            c1 += dc3_dy;
            c2 += dc2_dy;
            y = y + T::one();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f64, y: f64, c: Rgbcolor<f64>, a: f64) -> AlphaVertex<f64> {
        AlphaVertex::new(Coord2::new(x, y), c, a)
    }

    #[test]
    fn test_opaque_triangle_coverage() {
        let mut img = Raster::<Rgbcolor<f64>>::new(100, 100);
        let white = Rgbcolor::white();

        dda_rasterize_triangle(
            &mut img,
            &AlphaTriangle {
                v1: vertex(0.0, 0.0, white, 0.0),
                v2: vertex(0.0, 99.0, white, 0.0),
                v3: vertex(99.0, 50.0, white, 0.0),
            },
        );

        // inside
        assert_eq!(*img.get(0, 0).unwrap(), white);
        assert_eq!(*img.get(50, 50).unwrap(), white);
        assert_eq!(*img.get(99, 50).unwrap(), white);
        // outside
        assert_eq!(*img.get(99, 0).unwrap(), Rgbcolor::black());
        assert_eq!(*img.get(99, 99).unwrap(), Rgbcolor::black());
    }

    #[test]
    fn test_vertex_colors_average_at_centroid() {
        let mut img = Raster::<Rgbcolor<f64>>::new(90, 90);

        let r = Rgbcolor::new(1.0, 0.0, 0.0);
        let g = Rgbcolor::new(0.0, 1.0, 0.0);
        let b = Rgbcolor::new(0.0, 0.0, 1.0);

        // covers the whole image, one vertex color per corner region
        dda_rasterize_triangle(
            &mut img,
            &AlphaTriangle {
                v1: vertex(-90.0, -90.0, r, 0.0),
                v2: vertex(180.0, 45.0, g, 0.0),
                v3: vertex(-90.0, 180.0, b, 0.0),
            },
        );

        let centroid = img.get(0, 45).unwrap();
        let mean = (r + g + b) / 3.0;

        assert!((centroid.r - mean.r).abs() < 0.02);
        assert!((centroid.g - mean.g).abs() < 0.02);
        assert!((centroid.b - mean.b).abs() < 0.02);
    }

    #[test]
    fn test_alpha_blends_with_existing() {
        let mut img = Raster::<Rgbcolor<f64>>::filled(10, 10, Rgbcolor::white());

        // a half-transparent black triangle covering everything
        dda_rasterize_triangle(
            &mut img,
            &AlphaTriangle {
                v1: vertex(-10.0, -10.0, Rgbcolor::black(), 0.5),
                v2: vertex(30.0, 5.0, Rgbcolor::black(), 0.5),
                v3: vertex(-10.0, 30.0, Rgbcolor::black(), 0.5),
            },
        );

        let c = img.get(5, 5).unwrap();
        assert!((c.r - 0.5).abs() < 1e-9);
        assert!((c.g - 0.5).abs() < 1e-9);
        assert!((c.b - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_flat_top_triangle_does_not_vanish() {
        let mut img = Raster::<Rgbcolor<f64>>::new(20, 20);
        let white = Rgbcolor::white();

        // p1.y == p2.y triggers the x/y swap path
        dda_rasterize_triangle(
            &mut img,
            &AlphaTriangle {
                v1: vertex(2.0, 2.0, white, 0.0),
                v2: vertex(18.0, 2.0, white, 0.0),
                v3: vertex(10.0, 18.0, white, 0.0),
            },
        );

        assert_eq!(*img.get(10, 10).unwrap(), white);
        assert_eq!(*img.get(0, 0).unwrap(), Rgbcolor::black());
    }

    #[test]
    fn test_offscreen_spans_are_clipped() {
        let mut img = Raster::<Rgbcolor<f64>>::new(10, 10);

        // wildly out of bounds, must neither panic nor write outside
        dda_rasterize_triangle(
            &mut img,
            &AlphaTriangle {
                v1: vertex(-50.0, -50.0, Rgbcolor::white(), 0.0),
                v2: vertex(60.0, 5.0, Rgbcolor::white(), 0.0),
                v3: vertex(-50.0, 60.0, Rgbcolor::white(), 0.0),
            },
        );

        assert!(img.get(5, 5).is_ok());
    }
}
