use geo::{Coord2, Scalar};
use rand::Rng;
use rand_xorshift::XorShiftRng;

use crate::samplegen::{entropy_rng, near_one, seeded_rng};

/// A distributor of `n` sample positions over `[0, 1)^2`.
pub trait SampleGenerator2<T: Scalar>: Send + Sync {
    fn get_samples(&mut self, num_samples: usize) -> Vec<Coord2<T>>;

    /// Restart the generator's PRNG from the given seed.
    fn reseed(&mut self, seed: u64);

    /// A fresh, independent copy of this generator.
    fn clone_new(&self) -> Box<dyn SampleGenerator2<T>>;
}

fn next_coord<T: Scalar>(rng: &mut XorShiftRng) -> Coord2<T> {
    Coord2::new(T::of(rng.gen::<f64>()), T::of(rng.gen::<f64>()))
}

/// Grid dimensions for the regular and jittered patterns. Favors width over
/// height, which suits images that are wider than tall; a square count
/// gives a square grid.
fn grid_dims(num_samples: usize) -> (usize, usize) {
    let height = (num_samples as f64).sqrt() as usize;
    let height = height.max(1);
    let width = num_samples / height;

    (width, height)
}

fn grid_scalar<T: Scalar>(cells: usize) -> T {
    if cells > 1 {
        near_one::<T>() / T::of((cells - 1) as f64)
    } else {
        T::zero()
    }
}

/// Uniform independent samples.
#[derive(Debug, Clone)]
pub struct Random2 {
    rng: XorShiftRng,
}

impl Random2 {
    pub fn new() -> Self {
        Random2 { rng: entropy_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Random2 {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for Random2 {
    fn default() -> Self {
        Random2::new()
    }
}

impl<T: Scalar> SampleGenerator2<T> for Random2 {
    fn get_samples(&mut self, num_samples: usize) -> Vec<Coord2<T>> {
        (0..num_samples).map(|_| next_coord(&mut self.rng)).collect()
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = seeded_rng(seed);
    }

    fn clone_new(&self) -> Box<dyn SampleGenerator2<T>> {
        Box::new(self.clone())
    }
}

/// Points at the lower-left of each cell of a regular grid.
#[derive(Debug, Clone, Default)]
pub struct Regular2;

impl Regular2 {
    pub fn new() -> Self {
        Regular2
    }
}

impl<T: Scalar> SampleGenerator2<T> for Regular2 {
    fn get_samples(&mut self, num_samples: usize) -> Vec<Coord2<T>> {
        let (width, height) = grid_dims(num_samples);
        let scalar_x = grid_scalar::<T>(width);
        let scalar_y = grid_scalar::<T>(height);

        let mut v = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                v.push(Coord2::new(
                    T::of(x as f64) * scalar_x,
                    T::of(y as f64) * scalar_y,
                ));
            }
        }
        v
    }

    fn reseed(&mut self, _seed: u64) {}

    fn clone_new(&self) -> Box<dyn SampleGenerator2<T>> {
        Box::new(Regular2)
    }
}

/// Stratified samples: one uniform draw within each grid cell.
#[derive(Debug, Clone)]
pub struct Jitter2 {
    rng: XorShiftRng,
}

impl Jitter2 {
    pub fn new() -> Self {
        Jitter2 { rng: entropy_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Jitter2 {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for Jitter2 {
    fn default() -> Self {
        Jitter2::new()
    }
}

impl<T: Scalar> SampleGenerator2<T> for Jitter2 {
    fn get_samples(&mut self, num_samples: usize) -> Vec<Coord2<T>> {
        let (width, height) = grid_dims(num_samples);

        let mut v = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let p = next_coord::<T>(&mut self.rng);
                v.push(Coord2::new(
                    (T::of(x as f64) + p.x) / T::of(width as f64),
                    (T::of(y as f64) + p.y) / T::of(height as f64),
                ));
            }
        }
        v
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = seeded_rng(seed);
    }

    fn clone_new(&self) -> Box<dyn SampleGenerator2<T>> {
        Box::new(self.clone())
    }
}

/// A jittered take on the n-rooks problem: every sample occupies a row and
/// a column no other sample shares.
///
/// ```text
/// |   | x |   |   |   |
/// |   |   |   |   | x |
/// |   |   | x |   |   |
/// | x |   |   |   |   |
/// |   |   |   | x |   |
/// ```
#[derive(Debug, Clone)]
pub struct NRooks2 {
    rng: XorShiftRng,
}

impl NRooks2 {
    pub fn new() -> Self {
        NRooks2 { rng: entropy_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        NRooks2 {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for NRooks2 {
    fn default() -> Self {
        NRooks2::new()
    }
}

impl<T: Scalar> SampleGenerator2<T> for NRooks2 {
    fn get_samples(&mut self, num_samples: usize) -> Vec<Coord2<T>> {
        let n = T::of(num_samples as f64);

        let mut v: Vec<Coord2<T>> = (0..num_samples)
            .map(|i| {
                let p = next_coord::<T>(&mut self.rng);
                Coord2::new((p.x + T::of(i as f64)) / n, (p.y + T::of(i as f64)) / n)
            })
            .collect();

        // Fisher-Yates on the x coordinates only, which breaks the diagonal
        // while keeping rows and columns unique.
        for i in (1..num_samples).rev() {
            let target = (self.rng.gen::<f64>() * i as f64) as usize;
            let tmp = v[i].x;
            v[i].x = v[target].x;
            v[target].x = tmp;
        }

        v
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = seeded_rng(seed);
    }

    fn clone_new(&self) -> Box<dyn SampleGenerator2<T>> {
        Box::new(self.clone())
    }
}

/// The canonical Chiu-Shirley-Wang multi-jittered pattern over a
/// `ceil(sqrt(n))^2` grid: jittered cells whose x and y coordinates are then
/// shuffled within each column and row.
#[derive(Debug, Clone)]
pub struct MultiJitter2 {
    rng: XorShiftRng,
}

impl MultiJitter2 {
    pub fn new() -> Self {
        MultiJitter2 { rng: entropy_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        MultiJitter2 {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for MultiJitter2 {
    fn default() -> Self {
        MultiJitter2::new()
    }
}

impl<T: Scalar> SampleGenerator2<T> for MultiJitter2 {
    fn get_samples(&mut self, num_samples: usize) -> Vec<Coord2<T>> {
        // Force a perfect square.
        let mut sqrt_samples = (num_samples as f64).sqrt() as usize;
        if sqrt_samples * sqrt_samples != num_samples {
            sqrt_samples += 1;
        }
        let num_samples = sqrt_samples * sqrt_samples;

        let subcell_width = T::one() / T::of(num_samples as f64);

        let mut v = vec![Coord2::<T>::zero(); num_samples];

        // The "canonical" arrangement before any shuffling.
        for y in 0..sqrt_samples {
            let linear_y = y * sqrt_samples;
            for x in 0..sqrt_samples {
                let p = next_coord::<T>(&mut self.rng);
                v[linear_y + x].set(
                    subcell_width * (T::of((x + linear_y) as f64) + p.x),
                    subcell_width * (T::of((y + x * sqrt_samples) as f64) + p.y),
                );
            }
        }

        // Shuffle the y coordinates along each row and the x coordinates
        // along each column. One loop serves both directions.
        for y in 0..sqrt_samples {
            let linear_y = y * sqrt_samples;
            for current in (1..sqrt_samples).rev() {
                let (px, py) = (self.rng.gen::<f64>(), self.rng.gen::<f64>());

                let target_x = (px * current as f64) as usize;
                let (a, b) = (linear_y + current, linear_y + target_x);
                let tmp = v[a].y;
                v[a].y = v[b].y;
                v[b].y = tmp;

                let target_y = (py * current as f64) as usize;
                let x = y;
                let (a, b) = (current * sqrt_samples + x, target_y * sqrt_samples + x);
                let tmp = v[a].x;
                v[a].x = v[b].x;
                v[b].x = tmp;
            }
        }

        v
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = seeded_rng(seed);
    }

    fn clone_new(&self) -> Box<dyn SampleGenerator2<T>> {
        Box::new(self.clone())
    }
}

/// Poisson-disc sampling: uniform candidates rejected until all samples are
/// at least `distance` apart. A distance too large for the requested count
/// is shrunk by 0.9 after repeated restarts rather than failing.
#[derive(Debug, Clone)]
pub struct Poisson2<T> {
    rng: XorShiftRng,
    distance: T,
}

impl<T: Scalar> Poisson2<T> {
    pub fn new(distance: T) -> Self {
        Poisson2 {
            rng: entropy_rng(),
            distance,
        }
    }

    pub fn with_seed(distance: T, seed: u64) -> Self {
        Poisson2 {
            rng: seeded_rng(seed),
            distance,
        }
    }
}

impl<T: Scalar> SampleGenerator2<T> for Poisson2<T> {
    fn get_samples(&mut self, num_samples: usize) -> Vec<Coord2<T>> {
        let mut samples = vec![Coord2::<T>::zero(); num_samples];
        let mut gathered = 0;
        let mut bad_attempts = 0;
        let mut restarts = 0;

        while gathered < num_samples {
            let next = next_coord::<T>(&mut self.rng);

            let too_close = samples[..gathered].iter().any(|s| {
                let d = next - *s;
                (d.x * d.x + d.y * d.y).sqrt() < self.distance
            });

            if !too_close {
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

    fn clone_new(&self) -> Box<dyn SampleGenerator2<T>> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_unit_square(samples: &[Coord2<f64>]) -> bool {
        samples
            .iter()
            .all(|s| (0.0..1.0).contains(&s.x) && (0.0..1.0).contains(&s.y))
    }

    #[test]
    fn test_counts_and_ranges() {
        let n = 16;

        let mut gens: Vec<Box<dyn SampleGenerator2<f64>>> = vec![
            Box::new(Regular2::new()),
            Box::new(Random2::with_seed(7)),
            Box::new(Jitter2::with_seed(7)),
            Box::new(NRooks2::with_seed(7)),
            Box::new(MultiJitter2::with_seed(7)),
            Box::new(Poisson2::with_seed(0.1, 7)),
        ];

        for g in &mut gens {
            let samples = g.get_samples(n);
            assert_eq!(samples.len(), n);
            assert!(in_unit_square(&samples));
        }
    }

    #[test]
    fn test_single_sample_does_not_blow_up() {
        let samples = <Regular2 as SampleGenerator2<f64>>::get_samples(&mut Regular2::new(), 1);
        assert_eq!(samples.len(), 1);
        assert!(samples[0].x.is_finite() && samples[0].y.is_finite());
    }

    #[test]
    fn test_jitter_is_stratified() {
        let mut g = Jitter2::with_seed(99);
        let samples: Vec<Coord2<f64>> = g.get_samples(16);

        // one sample in each cell of the 4x4 grid
        let mut buckets = [[0usize; 4]; 4];
        for s in &samples {
            buckets[(s.y * 4.0) as usize][(s.x * 4.0) as usize] += 1;
        }
        assert!(buckets.iter().flatten().all(|&c| c == 1));
    }

    #[test]
    fn test_nrooks_rows_and_columns_are_unique() {
        let n = 8;
        let mut g = NRooks2::with_seed(3);
        let samples: Vec<Coord2<f64>> = g.get_samples(n);

        let mut rows = vec![false; n];
        let mut cols = vec![false; n];
        for s in &samples {
            let r = (s.y * n as f64) as usize;
            let c = (s.x * n as f64) as usize;
            assert!(!rows[r], "row {r} occupied twice");
            assert!(!cols[c], "column {c} occupied twice");
            rows[r] = true;
            cols[c] = true;
        }
    }

    #[test]
    fn test_multi_jitter_is_a_stratified_permutation() {
        let n = 16;
        let strata = 4;
        let mut g = MultiJitter2::with_seed(11);
        let samples: Vec<Coord2<f64>> = g.get_samples(n);

        assert_eq!(samples.len(), n);

        // bucketed by sqrt(n) strata in both axes, each stratum holds
        // exactly sqrt(n) samples
        let mut xs = vec![0usize; strata];
        let mut ys = vec![0usize; strata];
        for s in &samples {
            xs[(s.x * strata as f64) as usize] += 1;
            ys[(s.y * strata as f64) as usize] += 1;
        }
        assert!(xs.iter().all(|&c| c == strata));
        assert!(ys.iter().all(|&c| c == strata));

        // and the fine n-grid is fully covered in both axes
        let mut fine_x = vec![false; n];
        let mut fine_y = vec![false; n];
        for s in &samples {
            fine_x[(s.x * n as f64) as usize] = true;
            fine_y[(s.y * n as f64) as usize] = true;
        }
        assert!(fine_x.iter().all(|&b| b));
        assert!(fine_y.iter().all(|&b| b));
    }

    #[test]
    fn test_poisson_minimum_distance() {
        let mut g = Poisson2::with_seed(0.1, 5);
        let samples: Vec<Coord2<f64>> = g.get_samples(10);

        for (i, a) in samples.iter().enumerate() {
            for b in &samples[i + 1..] {
                let d = *a - *b;
                assert!((d.x * d.x + d.y * d.y).sqrt() >= 0.1);
            }
        }
    }

    #[test]
    fn test_seeded_generators_reproduce() {
        let a: Vec<Coord2<f64>> = Jitter2::with_seed(42).get_samples(8);
        let b: Vec<Coord2<f64>> = Jitter2::with_seed(42).get_samples(8);
        assert_eq!(a, b);
    }
}
