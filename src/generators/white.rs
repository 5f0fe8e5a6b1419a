//! White noise generator implementation.

use crate::Signal;
use rand::Rng;
use rand::rngs::StdRng;

/// A white noise generator.
///
/// Each sample is an independent random value uniformly distributed in
/// `[-amplitude, amplitude]`. Every instance owns its own pseudo-random
/// stream; there is no shared process-wide generator, so two instances
/// seeded identically produce identical output.
pub struct WhiteNoiseGenerator<R: Rng = StdRng> {
    /// Output scaling factor
    amplitude: f64,
    /// Random number generator
    rng: R,
}

impl WhiteNoiseGenerator<StdRng> {
    /// Creates a new white noise generator with the default amplitude of
    /// 0.25 and an entropy-seeded RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonegen::{Signal, WhiteNoiseGenerator};
    ///
    /// let mut noise = WhiteNoiseGenerator::new();
    /// let sample = noise.next_sample();
    /// assert!(sample.abs() <= 0.25);
    /// ```
    pub fn new() -> Self {
        Self::with_amplitude(0.25)
    }

    /// Creates a new entropy-seeded white noise generator with the given
    /// amplitude.
    pub fn with_amplitude(amplitude: f64) -> Self {
        use rand::SeedableRng;
        Self {
            amplitude,
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for WhiteNoiseGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WhiteNoiseGenerator<R> {
    /// Creates a new white noise generator with a custom RNG.
    ///
    /// Useful for reproducible output in tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonegen::{Signal, WhiteNoiseGenerator};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoiseGenerator::with_rng(0.25, rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(amplitude: f64, rng: R) -> Self {
        Self { amplitude, rng }
    }
}

impl<R: Rng> Signal for WhiteNoiseGenerator<R> {
    fn next_sample(&mut self) -> f64 {
        // Scaling a unit draw keeps zero and negative amplitudes well-defined
        self.amplitude * self.rng.gen_range(-1.0..=1.0)
    }
}
