use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Source of randomness for draws.
///
/// The draw engine only ever asks for a uniform index and an independent
/// biased coin flip, so tests can script both exactly.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// `true` with probability `probability`.
    fn chance(&mut self, probability: f64) -> bool;
}

/// [`RandomSource`] backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R = Pcg64Mcg> {
    rng: R,
}

impl RngSource<Pcg64Mcg> {
    /// Deterministic PCG stream; identical seeds give identical draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg64Mcg::from_entropy(),
        }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }
}
