use std::fmt::Debug;

use geo::{Coord2, Frame, Interval, Point3, Scalar, UnitLine3, Vector3};

use crate::ray_parameters::RayParameters;

/// Anything that can turn a position on the image into a ray through the
/// scene.
pub trait Camera<T: Scalar>: Debug + Send + Sync {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// A ray for a sample position in `[0,1]^2`, with a normalized time in
    /// `[0,1]`.
    fn get_ray_for_sample(&self, sample: Coord2<T>, time: T) -> RayParameters<T>;

    /// A ray for a pixel position; divides by `(width - 1, height - 1)`,
    /// flips both axes and delegates to the sample version. Together with
    /// the sample-space flip this leaves image x growing right and image y
    /// growing up.
    fn get_ray(&self, px: T, py: T, time: T) -> RayParameters<T> {
        let u = T::one() - px / T::of((self.width() - 1) as f64);
        let v = T::one() - py / T::of((self.height() - 1) as f64);

        self.get_ray_for_sample(Coord2::new(u, v), time)
    }
}

/// The classic pinhole: a viewing frame, a virtual screen hanging
/// `distance` in front of it, and an optional shutter interval that the
/// per-ray time is remapped into.
#[derive(Debug, Clone, PartialEq)]
pub struct PinholeCamera<T> {
    frame: Frame<T>,
    ll_corner: Coord2<T>,
    ur_corner: Coord2<T>,
    distance: T,
    screen_size: Coord2<T>,
    width: usize,
    height: usize,
    shutter: Interval<T>,
}

impl<T: Scalar> PinholeCamera<T> {
    pub fn new(
        eye: Point3<T>,
        gaze: Vector3<T>,
        up: Vector3<T>,
        screen_width: T,
        screen_height: T,
        screen_distance: T,
        width: usize,
        height: usize,
    ) -> Self {
        let two = T::of(2.0);

        PinholeCamera {
            frame: Frame::from_wv(eye, gaze, up),
            ll_corner: Coord2::new(-screen_width / two, -screen_height / two),
            ur_corner: Coord2::new(screen_width / two, screen_height / two),
            distance: screen_distance,
            screen_size: Coord2::new(screen_width, screen_height),
            width,
            height,
            shutter: Interval::empty(),
        }
    }

    /// Keep the shutter open over the given time interval; ray times are
    /// remapped from `[0,1]` into it.
    pub fn with_shutter(mut self, shutter: Interval<T>) -> Self {
        self.shutter = shutter;
        self
    }

    pub fn frame(&self) -> &Frame<T> {
        &self.frame
    }

    fn adjusted_time(&self, time: T) -> T {
        if self.shutter.is_empty() {
            time
        } else {
            self.shutter.begin() + time * (self.shutter.end() - self.shutter.begin())
        }
    }
}

impl<T: Scalar> Default for PinholeCamera<T> {
    fn default() -> Self {
        PinholeCamera::new(
            Point3::origin(),
            Vector3::new(T::zero(), T::zero(), T::one()),
            Vector3::new(T::zero(), T::one(), T::zero()),
            T::one(),
            T::one(),
            T::one(),
            100,
            100,
        )
    }
}

impl<T: Scalar> Camera<T> for PinholeCamera<T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get_ray_for_sample(&self, sample: Coord2<T>, time: T) -> RayParameters<T> {
        // Both axes are flipped so that, after rendering, image x grows to
        // the right and y grows up the screen. Doing it here rather than at
        // output time keeps the examples trivial.
        let view_point = Point3::new(
            self.ll_corner.x + (T::one() - sample.x) * self.screen_size.x,
            self.ll_corner.y + (T::one() - sample.y) * self.screen_size.y,
            self.distance,
        );

        let line = UnitLine3::new(
            self.frame.origin(),
            self.frame.inverse_transform_point(&view_point) - self.frame.origin(),
        );

        RayParameters::with_time(line, self.adjusted_time(time))
    }
}
