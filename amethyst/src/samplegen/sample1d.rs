use geo::Scalar;
use rand::Rng;
use rand_xorshift::XorShiftRng;

use crate::samplegen::{entropy_rng, near_one, seeded_rng};

/// A distributor of `n` sample positions over `[0, 1)`.
pub trait SampleGenerator1<T: Scalar>: Send + Sync {
    fn get_samples(&mut self, num_samples: usize) -> Vec<T>;

    fn reseed(&mut self, seed: u64);

    fn clone_new(&self) -> Box<dyn SampleGenerator1<T>>;
}

#[derive(Debug, Clone)]
pub struct Random1 {
    rng: XorShiftRng,
}

impl Random1 {
    pub fn new() -> Self {
        Random1 { rng: entropy_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Random1 {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for Random1 {
    fn default() -> Self {
        Random1::new()
    }
}

impl<T: Scalar> SampleGenerator1<T> for Random1 {
    fn get_samples(&mut self, num_samples: usize) -> Vec<T> {
        (0..num_samples)
            .map(|_| T::of(self.rng.gen::<f64>()))
            .collect()
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = seeded_rng(seed);
    }

    fn clone_new(&self) -> Box<dyn SampleGenerator1<T>> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Regular1;

impl Regular1 {
    pub fn new() -> Self {
        Regular1
    }
}

impl<T: Scalar> SampleGenerator1<T> for Regular1 {
    fn get_samples(&mut self, num_samples: usize) -> Vec<T> {
        let scalar = if num_samples > 1 {
            near_one::<T>() / T::of((num_samples - 1) as f64)
        } else {
            T::zero()
        };

        (0..num_samples).map(|x| T::of(x as f64) * scalar).collect()
    }

    fn reseed(&mut self, _seed: u64) {}

    fn clone_new(&self) -> Box<dyn SampleGenerator1<T>> {
        Box::new(Regular1)
    }
}

#[derive(Debug, Clone)]
pub struct Jitter1 {
    rng: XorShiftRng,
}

impl Jitter1 {
    pub fn new() -> Self {
        Jitter1 { rng: entropy_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Jitter1 {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for Jitter1 {
    fn default() -> Self {
        Jitter1::new()
    }
}

impl<T: Scalar> SampleGenerator1<T> for Jitter1 {
    fn get_samples(&mut self, num_samples: usize) -> Vec<T> {
        let n = T::of(num_samples as f64);

        (0..num_samples)
            .map(|x| (T::of(x as f64) + T::of(self.rng.gen::<f64>())) / n)
            .collect()
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = seeded_rng(seed);
    }

    fn clone_new(&self) -> Box<dyn SampleGenerator1<T>> {
        Box::new(self.clone())
    }
}

/// Poisson sampling, the 1D equivalent of disc sampling: candidates closer
/// than `distance` to an accepted sample are rejected, and the distance is
/// lowered when it proves infeasible.
#[derive(Debug, Clone)]
pub struct Poisson1<T> {
    rng: XorShiftRng,
    distance: T,
}

impl<T: Scalar> Poisson1<T> {
    pub fn new(distance: T) -> Self {
        Poisson1 {
            rng: entropy_rng(),
            distance,
        }
    }

    pub fn with_seed(distance: T, seed: u64) -> Self {
        Poisson1 {
            rng: seeded_rng(seed),
            distance,
        }
    }
}

impl<T: Scalar> SampleGenerator1<T> for Poisson1<T> {
    fn get_samples(&mut self, num_samples: usize) -> Vec<T> {
        let mut samples = vec![T::zero(); num_samples];
        let mut gathered = 0;
        let mut bad_attempts = 0;
        let mut restarts = 0;

        while gathered < num_samples {
            let next = T::of(self.rng.gen::<f64>());

            if samples[..gathered]
                .iter()
                .all(|s| (next - *s).abs() >= self.distance)
            {
                samples[gathered] = next;
                gathered += 1;
                bad_attempts = 0;
                continue;
            }

            bad_attempts += 1;
            if bad_attempts > num_samples {
                gathered = 0;
                restarts += 1;
                bad_attempts = 0;

                if restarts > num_samples / 2 {
                    log::warn!(
                        "poisson distance {:?} is too large for {} samples, lowering",
                        self.distance,
                        num_samples
                    );
                    self.distance = self.distance * T::of(0.9);
                    restarts = 0;
                }
            }
        }

        samples
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = seeded_rng(seed);
    }

    fn clone_new(&self) -> Box<dyn SampleGenerator1<T>> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_ranges() {
        let mut gens: Vec<Box<dyn SampleGenerator1<f64>>> = vec![
            Box::new(Regular1::new()),
            Box::new(Random1::with_seed(1)),
            Box::new(Jitter1::with_seed(1)),
            Box::new(Poisson1::with_seed(0.01, 1)),
        ];

        for g in &mut gens {
            let samples = g.get_samples(10);
            assert_eq!(samples.len(), 10);
            assert!(samples.iter().all(|s| (0.0..1.0).contains(s)));
        }
    }

    #[test]
    fn test_regular_endpoints() {
        let samples: Vec<f64> = Regular1::new().get_samples(5);

        assert_eq!(samples[0], 0.0);
        assert!(samples[4] < 1.0);
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_jitter_is_stratified() {
        let samples: Vec<f64> = Jitter1::with_seed(4).get_samples(8);

        for (i, s) in samples.iter().enumerate() {
            assert!(*s >= i as f64 / 8.0 && *s < (i + 1) as f64 / 8.0);
        }
    }
}
