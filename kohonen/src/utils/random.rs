#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::Error;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the half-open interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;
}

/// A default random implementation.
pub struct DefaultRandom {
    rng: RandomGen,
}

impl DefaultRandom {
    /// Creates an instance of `DefaultRandom` which produces the same sequence on every run.
    pub fn new_repeatable() -> Self {
        Self::with_seed(0)
    }

    /// Creates an instance of `DefaultRandom` seeded with the given value.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: RandomGen::seed_from_u64(seed) }
    }

    /// Returns RNG which shares its state with this instance.
    pub fn get_rng(&self) -> RandomGen {
        self.rng.clone()
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RandomGen::with_rng(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..=max)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }
}

/// Specifies underlying random generator type. Clones share the same generator state.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Arc<Mutex<SmallRng>>,
}

impl RandomGen {
    /// Creates a new instance of `RandomGen` which owns the given small rng.
    pub fn with_rng(rng: SmallRng) -> Self {
        Self { rng: Arc::new(Mutex::new(rng)) }
    }

    fn inner(&self) -> MutexGuard<'_, SmallRng> {
        // NOTE the guarded state is a plain generator, it stays valid even after a panic
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SeedableRng for RandomGen {
    type Seed = <SmallRng as SeedableRng>::Seed;

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_rng(SmallRng::from_seed(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(state))
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.inner().next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.inner().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner().try_fill_bytes(dest)
    }
}
