//! Two spheres, one standing in for the ground, shaded by their normals.

use std::sync::Arc;

use amethyst::io::save_image;
use amethyst::renderer::render;
use amethyst::samplegen::Jitter2;
use amethyst::{
    Aggregate, IntersectionRequirements, MaterialCapabilities, PinholeCamera, Rgbcolor, Sphere,
    Texture,
};
use geo::{Coord2, Point3, Vector3};

#[derive(Debug)]
struct NormalShade;

impl Texture<f64> for NormalShade {
    fn get_color(
        &self,
        _location: &Point3<f64>,
        _uv: &Coord2<f64>,
        normal: &Vector3<f64>,
    ) -> Rgbcolor<f64> {
        Rgbcolor::new(
            0.5 * (normal.x + 1.0),
            0.5 * (normal.y + 1.0),
            0.5 * (normal.z + 1.0),
        )
    }

    fn capabilities(&self) -> MaterialCapabilities {
        MaterialCapabilities::DIFFUSE
    }
}

fn main() -> amethyst::Result<()> {
    env_logger::init();
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "rtiow_04_multiple_spheres.ppm".to_owned());

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

    let requirements = IntersectionRequirements::new()
        .force_first_only(true)
        .force_normal(true)
        .force_uv(true);

    let img = render(
        &camera,
        &scene,
        &NormalShade,
        nx,
        ny,
        &requirements,
        &|_p: &Point3<f64>, _n: &Vector3<f64>| Rgbcolor::white(),
        None,
        4,
        &mut Jitter2::new(),
    );

    save_image(&output, &img)
}
