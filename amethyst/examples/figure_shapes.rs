//! A little gallery scene: a marble rectangle floor, a disc and a triangle
//! floating over it, rendered in parallel with a shutter interval set (the
//! shapes here don't move, but the rays carry the sampled time through).

use std::sync::Arc;

use amethyst::io::save_image;
use amethyst::renderer::parallel_render;
use amethyst::samplegen::MultiJitter2;
use amethyst::texture::MarbleTexture;
use amethyst::{
    Aggregate, Disc, IntersectionRequirements, PinholeCamera, Rectangle, Rgbcolor, Triangle,
};
use geo::{Interval, Point3, Vector3};

fn main() -> amethyst::Result<()> {
    env_logger::init();
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "figure_shapes.tga".to_owned());

    let (nx, ny) = (500, 500);

    let camera = PinholeCamera::new(
        Point3::new(0.0, 1.5, 4.0),
        Vector3::new(0.0, -0.3, -1.0),
        Vector3::new(0.0, 1.0, 0.0),
        2.0,
        2.0,
        1.0,
        nx,
        ny,
    )
    .with_shutter(Interval::new(0.0, 1.0));

    let mut scene = Aggregate::new();
    scene.add(Arc::new(Rectangle::new(
        Point3::new(-3.0, 0.0, -3.0),
        Vector3::new(6.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 6.0),
    )));
    scene.add(Arc::new(Disc::new(
        Point3::new(-0.8, 1.0, -1.0),
        0.7,
        Vector3::new(0.2, 0.3, 1.0),
    )));
    scene.add(Arc::new(Triangle::new(
        Point3::new(0.3, 0.4, -0.5),
        Point3::new(1.6, 0.5, -0.9),
        Point3::new(0.9, 1.8, -0.7),
    )));

    let scene_texture = MarbleTexture::with_seed(0.5, 1.0, 8, 42);

    let requirements = IntersectionRequirements::new()
        .force_first_only(true)
        .force_normal(true)
        .force_uv(true);

    let brightness = |p: &Point3<f64>, n: &Vector3<f64>| {
        // one hard-coded directional light, clamped lambert falloff
        let towards_light = (Point3::new(4.0, 6.0, 3.0) - *p).unit();
        let diffuse = n.dot(&towards_light).max(0.1);
        Rgbcolor::gray(diffuse)
    };

    let img = parallel_render(
        &camera,
        &scene,
        &scene_texture,
        nx,
        ny,
        &requirements,
        &brightness,
        None,
        9,
        &MultiJitter2::new(),
    );

    save_image(&output, &img)
}
