//! The 2D side of the house: alpha-blended triangles rasterized straight
//! into a raster and written as a TGA.

use amethyst::alpha_triangle::{dda_rasterize_triangle, AlphaTriangle, AlphaVertex};
use amethyst::io::save_image;
use amethyst::{Raster, Rgbcolor};
use geo::Coord2;

fn vertex(x: f64, y: f64, rgb: Rgbcolor<f64>, alpha: f64) -> AlphaVertex<f64> {
    AlphaVertex::new(Coord2::new(x, y), rgb, alpha)
}

fn main() -> amethyst::Result<()> {
    env_logger::init();
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "alpha_triangles.tga".to_owned());

    let mut img = Raster::filled(512, 512, Rgbcolor::gray(0.1));

    let red = Rgbcolor::new(0.9, 0.2, 0.2);
    let green = Rgbcolor::new(0.2, 0.9, 0.2);
    let blue = Rgbcolor::new(0.3, 0.3, 1.0);

    // an opaque base triangle and two transparent ones layered over it
    dda_rasterize_triangle(
        &mut img,
        &AlphaTriangle {
            v1: vertex(60.0, 40.0, red, 0.0),
            v2: vertex(470.0, 140.0, green, 0.0),
            v3: vertex(150.0, 480.0, blue, 0.0),
        },
    );
    dda_rasterize_triangle(
        &mut img,
        &AlphaTriangle {
            v1: vertex(256.0, 20.0, blue, 0.55),
            v2: vertex(490.0, 420.0, blue, 0.55),
            v3: vertex(40.0, 420.0, blue, 0.3),
        },
    );
    dda_rasterize_triangle(
        &mut img,
        &AlphaTriangle {
            v1: vertex(30.0, 100.0, Rgbcolor::white(), 0.7),
            v2: vertex(480.0, 60.0, Rgbcolor::white(), 0.4),
            v3: vertex(300.0, 300.0, Rgbcolor::white(), 0.7),
        },
    );

    save_image(&output, &img)
}
