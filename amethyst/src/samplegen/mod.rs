//! Stratified sample distribution in one, two and three dimensions.
//!
//! Every generator owns a seedable xorshift PRNG, so renders are
//! reproducible and generators can be handed to worker threads without any
//! sharing.

pub mod sample1d;
pub mod sample2d;
pub mod sample3d;

use geo::Scalar;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

pub use sample1d::{Jitter1, Poisson1, Random1, Regular1, SampleGenerator1};
pub use sample2d::{
    Jitter2, MultiJitter2, NRooks2, Poisson2, Random2, Regular2, SampleGenerator2,
};
pub use sample3d::{random_in_unit_sphere, Random3, SampleGenerator3, SphereSample3};

/// Just under one; regular grids are scaled by it so samples stay inside
/// `[0, 1)`.
pub(crate) fn near_one<T: Scalar>() -> T {
    T::one() - T::tolerance()
}

pub(crate) fn entropy_rng() -> XorShiftRng {
    XorShiftRng::from_entropy()
}

pub(crate) fn seeded_rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}
