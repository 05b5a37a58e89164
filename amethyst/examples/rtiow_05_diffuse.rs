//! Diffuse spheres lit purely by bounced sky light, gamma corrected on the
//! way out.

use std::sync::Arc;

use amethyst::io::{gamma_convert, save_image};
use amethyst::renderer::render;
use amethyst::samplegen::Jitter2;
use amethyst::texture::Lambertian;
use amethyst::{Aggregate, IntersectionRequirements, PinholeCamera, Rgbcolor, Sphere};
use geo::{Point3, Vector3};

fn main() -> amethyst::Result<()> {
    env_logger::init();
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "rtiow_05_diffuse.ppm".to_owned());

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

    let mut scene = Aggregate::new();
    scene.add(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)));
    scene.add(Arc::new(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0)));

    let scene_texture = Lambertian::new(Rgbcolor::gray(0.5));

    let requirements = IntersectionRequirements::new()
        .force_first_only(true)
        .force_normal(true)
        .force_uv(true);

    let mut img = render(
        &camera,
        &scene,
        &scene_texture,
        nx,
        ny,
        &requirements,
        &|_p: &Point3<f64>, _n: &Vector3<f64>| Rgbcolor::black(),
        None,
        16,
        &mut Jitter2::new(),
    );

    for (_, _, pixel) in img.pixels_mut() {
        *pixel = gamma_convert(pixel, 2.0);
    }

    save_image(&output, &img)
}
