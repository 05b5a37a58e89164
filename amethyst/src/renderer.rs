//! The pixel loop and the recursive scene sampler.
//!
//! There is way too much duplicated code in sample programs without this:
//! [`render`] wires a camera, a scene, a scene texture and the lighting and
//! background callbacks into the plain pixel loop of [`render_with`], and
//! [`parallel_render`] does the same across worker rows with per-row
//! deterministic reseeding.

use geo::{Point3, Scalar, UnitLine3, Vector3};
use rand::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::intersection::IntersectionInfo;
use crate::raster::Raster;
use crate::ray_parameters::RayParameters;
use crate::requirements::IntersectionRequirements;
use crate::rgbcolor::{lerp, Rgbcolor};
use crate::samplegen::SampleGenerator2;
use crate::shapes::Shape;
use crate::texture::Texture;

/// Per-hit lighting: world position and normal to incoming light color.
pub type BrightnessFn<T> = dyn Fn(&Point3<T>, &Vector3<T>) -> Rgbcolor<T> + Sync;

/// What a ray that escaped the scene sees.
pub type BackgroundFn<T> = dyn Fn(T, T, &UnitLine3<T>) -> Rgbcolor<T> + Sync;

const RENDER_SEED: u64 = 0x616d_6574_6879_7374;

/// The default background: a vertical gradient fading from white at the
/// bottom to a light blue at the top.
pub fn gradient_background<T: Scalar>(_x: T, _y: T, line: &UnitLine3<T>) -> Rgbcolor<T> {
    // y in [-1, 1] maps to t in [0, 1]
    let t = T::of(0.5) * (line.direction().y + T::one());

    lerp(
        t,
        Rgbcolor::white(),
        Rgbcolor::new(T::of(0.5), T::of(0.7), T::one()),
    )
}

/// Drive the pixel loop: for every pixel, average `color` over the
/// sampler's sub-pixel offsets.
pub fn render_with<T: Scalar>(
    width: usize,
    height: usize,
    mut color: impl FnMut(T, T) -> Rgbcolor<T>,
    samples_per_pixel: usize,
    sampler: &mut dyn SampleGenerator2<T>,
) -> Raster<Rgbcolor<T>> {
    let mut result = Raster::new(width, height);

    for (x, y, pixel) in result.pixels_mut() {
        let samples = sampler.get_samples(samples_per_pixel);

        let mut sum = Rgbcolor::black();
        for sample in &samples {
            sum += color(T::of(x as f64) + sample.x, T::of(y as f64) + sample.y);
        }

        *pixel = sum / T::of(samples.len() as f64);
    }

    result
}

/// Integrate one ray against the scene.
///
/// A miss is the background. A hit is `light * local + reflected`, where
/// the reflected term recurses on the texture's scattered ray for as long
/// as the ray's depth budget lasts.
#[allow(clippy::too_many_arguments)]
pub fn sample_scene<T: Scalar>(
    x: T,
    y: T,
    ray: &RayParameters<T>,
    scene: &dyn Shape<T>,
    scene_texture: &dyn Texture<T>,
    requirements: &IntersectionRequirements,
    brightness: &BrightnessFn<T>,
    background: &BackgroundFn<T>,
    rng: &mut dyn RngCore,
) -> Rgbcolor<T> {
    let mut intersection = IntersectionInfo::new();
    if !scene.intersects_ray(ray, &mut intersection, requirements) {
        return background(x, y, ray.line());
    }

    let point = match intersection.first_point() {
        Some(p) => p,
        None => return background(x, y, ray.line()),
    };
    let normal = intersection.normal().unwrap_or_default();
    let uv = intersection.uv().unwrap_or_default();

    let light = brightness(&point, &normal);
    let local = scene_texture.get_color(&point, &uv, &normal);

    let mut reflected = Rgbcolor::black();
    if let Some(scatter) = scene_texture.scatter_ray(ray, &intersection, rng) {
        if scatter.ray.depth_ok() {
            reflected = scatter.attenuation
                * sample_scene(
                    x,
                    y,
                    &scatter.ray,
                    scene,
                    scene_texture,
                    requirements,
                    brightness,
                    background,
                    rng,
                );
        }
    }

    light * local + reflected
}

/// Render a scene through a camera into a raster.
///
/// Passing `None` for the background applies the gradient default.
#[allow(clippy::too_many_arguments)]
pub fn render<T: Scalar>(
    camera: &dyn Camera<T>,
    scene: &dyn Shape<T>,
    scene_texture: &dyn Texture<T>,
    width: usize,
    height: usize,
    requirements: &IntersectionRequirements,
    brightness: &BrightnessFn<T>,
    background: Option<&BackgroundFn<T>>,
    samples_per_pixel: usize,
    sampler: &mut dyn SampleGenerator2<T>,
) -> Raster<Rgbcolor<T>> {
    let default_background: &BackgroundFn<T> = &gradient_background;
    let background = background.unwrap_or(default_background);

    let mut rng = XorShiftRng::seed_from_u64(RENDER_SEED);

    let color = |x: T, y: T| {
        let ray = camera.get_ray(x, y, T::zero());
        sample_scene(
            x,
            y,
            &ray,
            scene,
            scene_texture,
            requirements,
            brightness,
            background,
            &mut rng,
        )
    };

    render_with(width, height, color, samples_per_pixel, sampler)
}

/// Like [`render`] but with the rows of the pixel grid spread across worker
/// threads.
///
/// Each row reseeds a private clone of the sampler and a private scatter
/// RNG from the row index, so the output is deterministic no matter how the
/// rows are scheduled.
#[allow(clippy::too_many_arguments)]
pub fn parallel_render<T: Scalar>(
    camera: &dyn Camera<T>,
    scene: &dyn Shape<T>,
    scene_texture: &dyn Texture<T>,
    width: usize,
    height: usize,
    requirements: &IntersectionRequirements,
    brightness: &BrightnessFn<T>,
    background: Option<&BackgroundFn<T>>,
    samples_per_pixel: usize,
    sampler: &dyn SampleGenerator2<T>,
) -> Raster<Rgbcolor<T>> {
    let default_background: &BackgroundFn<T> = &gradient_background;
    let background = background.unwrap_or(default_background);

    let mut result = Raster::new(width, height);
    if result.is_empty() {
        return result;
    }

    result
        .as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let mut sampler = sampler.clone_new();
            sampler.reseed(RENDER_SEED ^ (y as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
            let mut rng = XorShiftRng::seed_from_u64(RENDER_SEED ^ ((y as u64) << 32));

            for (x, pixel) in row.iter_mut().enumerate() {
                let samples = sampler.get_samples(samples_per_pixel);

                let mut sum = Rgbcolor::black();
                for sample in &samples {
                    let sx = T::of(x as f64) + sample.x;
                    let sy = T::of(y as f64) + sample.y;

                    let ray = camera.get_ray(sx, sy, T::zero());
                    sum += sample_scene(
                        sx,
                        sy,
                        &ray,
                        scene,
                        scene_texture,
                        requirements,
                        brightness,
                        background,
                        &mut rng,
                    );
                }

                *pixel = sum / T::of(samples.len() as f64);
            }
        });

    result
}
