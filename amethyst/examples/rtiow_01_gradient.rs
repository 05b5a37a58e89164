//! The empty scene: nothing but the gradient background.

use amethyst::io::save_image;
use amethyst::renderer::render;
use amethyst::samplegen::Regular2;
use amethyst::texture::Solid;
use amethyst::{Aggregate, IntersectionRequirements, PinholeCamera, Rgbcolor};
use geo::{Point3, Vector3};

fn main() -> amethyst::Result<()> {
    env_logger::init();
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "rtiow_01_gradient.ppm".to_owned());

    let (nx, ny) = (400, 200);

    let camera = PinholeCamera::new(
        Point3::origin(),
        Vector3::new(0.0, 0.0, -1.0),
        Vector3::new(0.0, 1.0, 0.0),
        4.0,
        2.0,
        1.0,
        nx,
        ny,
    );
    let scene = Aggregate::<f64>::new();
    let scene_texture = Solid::new(Rgbcolor::black());

    let img = render(
        &camera,
        &scene,
        &scene_texture,
        nx,
        ny,
        &IntersectionRequirements::new(),
        &|_p: &Point3<f64>, _n: &Vector3<f64>| Rgbcolor::black(),
        None,
        1,
        &mut Regular2::new(),
    );

    save_image(&output, &img)
}
