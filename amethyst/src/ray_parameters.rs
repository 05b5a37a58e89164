use geo::{Scalar, UnitLine3};

use crate::intersection::IntersectionInfo;

/// Bounces allowed for a ray that doesn't say otherwise.
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// A ray plus everything the integrator needs to know about it: the time it
/// was fired, the index of refraction of the medium it travels in, how much
/// it still contributes to the final pixel, and its recursion budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayParameters<T> {
    line: UnitLine3<T>,
    time: T,
    time_used: bool,
    ior: T,
    contribution: T,
    depth: u32,
    max_depth: u32,
}

impl<T: Scalar> RayParameters<T> {
    pub fn new(line: UnitLine3<T>) -> Self {
        RayParameters {
            line,
            time: T::zero(),
            time_used: false,
            ior: T::one(),
            contribution: T::one(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_time(line: UnitLine3<T>, time: T) -> Self {
        let mut r = RayParameters::new(line);
        r.set_time(time);
        r
    }

    pub fn line(&self) -> &UnitLine3<T> {
        &self.line
    }

    pub fn set_line(&mut self, line: UnitLine3<T>) {
        self.line = line;
    }

    pub fn time(&self) -> T {
        self.time
    }

    pub fn set_time(&mut self, time: T) {
        self.time = time;
        self.time_used = true;
    }

    pub fn time_used(&self) -> bool {
        self.time_used
    }

    pub fn ior(&self) -> T {
        self.ior
    }

    pub fn set_ior(&mut self, ior: T) {
        self.ior = ior;
    }

    pub fn contribution(&self) -> T {
        self.contribution
    }

    pub fn set_contribution(&mut self, contribution: T) {
        self.contribution = contribution;
    }

    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.max_depth = max_depth;
    }

    pub fn current_depth(&self) -> u32 {
        self.depth
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Whether this ray still has recursion budget left.
    pub fn depth_ok(&self) -> bool {
        self.depth < self.max_depth
    }

    pub fn primary_ray(&self) -> bool {
        self.depth == 0
    }

    /// The mirror reflection of this ray off the surface recorded in
    /// `intersection`. Returns `None` when the record is missing the hit
    /// point or normal.
    ///
    /// The returned ray keeps time, ior and contribution, starts with a
    /// fresh forward parameter range, and has its depth budget decremented
    /// so recursion eventually runs dry.
    pub fn perfect_reflection(
        &self,
        intersection: &IntersectionInfo<T>,
    ) -> Option<RayParameters<T>> {
        let point = intersection.first_point()?;
        let normal = intersection.normal()?;

        let mut cos = self.line.direction().dot(&normal);
        // A ray leaving along the normal of the surface it just hit would
        // tunnel through the object; flip the cosine so it bounces back.
        if cos > T::zero() {
            cos = -cos;
        }

        let direction = (self.line.direction() - normal * (cos + cos)).unit();

        Some(RayParameters {
            line: UnitLine3::new(point, direction),
            time: self.time,
            time_used: self.time_used,
            ior: self.ior,
            contribution: self.contribution,
            depth: 0,
            max_depth: self.remaining_depth(),
        })
    }

    /// The refraction of this ray into a medium with the given index,
    /// following Snell's law. `None` on total internal reflection or when
    /// the record is incomplete.
    pub fn refraction(
        &self,
        intersection: &IntersectionInfo<T>,
        ior: T,
    ) -> Option<RayParameters<T>> {
        let point = intersection.first_point()?;
        let normal = intersection.normal()?;

        let cos = self.line.direction().dot(&normal);
        let ratio = self.ior / ior;
        let radical = T::one() - (ratio * ratio) * (T::one() - cos * cos);

        if radical < T::zero() {
            return None;
        }

        let direction =
            ((self.line.direction() - normal * cos) * ratio - normal * radical.sqrt()).unit();

        Some(RayParameters {
            line: UnitLine3::new(point, direction),
            time: self.time,
            time_used: self.time_used,
            ior,
            contribution: self.contribution,
            depth: 0,
            max_depth: self.remaining_depth(),
        })
    }

    fn remaining_depth(&self) -> u32 {
        if self.max_depth > self.depth {
            self.max_depth - (self.depth + 1)
        } else {
            0
        }
    }
}
