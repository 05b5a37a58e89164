use geo::{Coord3, Scalar};
use rand::Rng;
use rand_xorshift::XorShiftRng;

use crate::samplegen::{entropy_rng, seeded_rng};

/// A distributor of sample positions over `[-1, 1]^3`.
pub trait SampleGenerator3<T: Scalar>: Send + Sync {
    fn get_samples(&mut self, num_samples: usize) -> Vec<Coord3<T>>;

    fn reseed(&mut self, seed: u64);

    fn clone_new(&self) -> Box<dyn SampleGenerator3<T>>;
}

/// A uniform draw from the cube `[-1, 1]^3`.
fn next_in_cube<T: Scalar, R: Rng + ?Sized>(rng: &mut R) -> Coord3<T> {
    let two = T::of(2.0);

    Coord3::new(
        two * T::of(rng.gen::<f64>()) - T::one(),
        two * T::of(rng.gen::<f64>()) - T::one(),
        two * T::of(rng.gen::<f64>()) - T::one(),
    )
}

/// A vector uniformly distributed in the unit ball, by rejection sampling
/// the enclosing cube.
pub fn random_in_unit_sphere<T: Scalar, R: Rng + ?Sized>(rng: &mut R) -> Coord3<T> {
    let mut result = next_in_cube(rng);
    while result.x * result.x + result.y * result.y + result.z * result.z >= T::one() {
        result = next_in_cube(rng);
    }
    result
}

#[derive(Debug, Clone)]
pub struct Random3 {
    rng: XorShiftRng,
}

impl Random3 {
    pub fn new() -> Self {
        Random3 { rng: entropy_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Random3 {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for Random3 {
    fn default() -> Self {
        Random3::new()
    }
}

impl<T: Scalar> SampleGenerator3<T> for Random3 {
    fn get_samples(&mut self, num_samples: usize) -> Vec<Coord3<T>> {
        (0..num_samples)
            .map(|_| next_in_cube(&mut self.rng))
            .collect()
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = seeded_rng(seed);
    }

    fn clone_new(&self) -> Box<dyn SampleGenerator3<T>> {
        Box::new(self.clone())
    }
}

/// The unit-ball sampler materials perturb their scattered rays with.
#[derive(Debug, Clone)]
pub struct SphereSample3 {
    rng: XorShiftRng,
}

impl SphereSample3 {
    pub fn new() -> Self {
        SphereSample3 { rng: entropy_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        SphereSample3 {
            rng: seeded_rng(seed),
        }
    }

    pub fn next_sample<T: Scalar>(&mut self) -> Coord3<T> {
        random_in_unit_sphere(&mut self.rng)
    }
}

impl Default for SphereSample3 {
    fn default() -> Self {
        SphereSample3::new()
    }
}

impl<T: Scalar> SampleGenerator3<T> for SphereSample3 {
    fn get_samples(&mut self, num_samples: usize) -> Vec<Coord3<T>> {
        (0..num_samples).map(|_| self.next_sample()).collect()
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = seeded_rng(seed);
    }

    fn clone_new(&self) -> Box<dyn SampleGenerator3<T>> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_stays_in_cube() {
        let samples: Vec<Coord3<f64>> = Random3::with_seed(2).get_samples(100);

        assert_eq!(samples.len(), 100);
        for s in samples {
            assert!(s.x.abs() <= 1.0 && s.y.abs() <= 1.0 && s.z.abs() <= 1.0);
        }
    }

    #[test]
    fn test_sphere_samples_stay_in_ball() {
        let samples: Vec<Coord3<f64>> = SphereSample3::with_seed(2).get_samples(100);

        for s in samples {
            assert!(s.x * s.x + s.y * s.y + s.z * s.z < 1.0);
        }
    }
}
