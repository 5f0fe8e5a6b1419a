//! Sine tone generator implementation.

use crate::Signal;

use super::PHASE_DIVISOR;

/// A sine tone generator.
///
/// Produces `amplitude * sin(sample_index / 16)` and advances the sample
/// index by one per call. The phase rate is a fixed per-sample recurrence,
/// not derived from a sample rate or a target frequency, so the audible
/// pitch depends on the rate the samples are played back at. The index is
/// a `u32` and wraps around at its maximum, uncorrected.
///
/// # Examples
///
/// ```
/// use tonegen::{Signal, SineGenerator};
///
/// let mut sine = SineGenerator::new();
/// assert_eq!(sine.next_sample(), 0.0);
/// assert_eq!(sine.next_sample(), (1.0f64 / 16.0).sin());
/// ```
pub struct SineGenerator {
    /// Output scaling factor
    amplitude: f64,
    /// Running sample index, wraps at u32::MAX
    sample_index: u32,
    /// Most recently produced sample, kept for diagnostics
    last_sample: f64,
}

impl SineGenerator {
    /// Creates a new sine generator with the default amplitude of 1.0.
    pub fn new() -> Self {
        Self::with_amplitude(1.0)
    }

    /// Creates a new sine generator with the given amplitude.
    ///
    /// The amplitude is unconstrained: 0.0 silences the output, a negative
    /// value inverts it.
    pub fn with_amplitude(amplitude: f64) -> Self {
        Self {
            amplitude,
            sample_index: 0,
            last_sample: 0.0,
        }
    }

    /// Returns the most recently produced sample.
    pub fn last_sample(&self) -> f64 {
        self.last_sample
    }
}

impl Default for SineGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for SineGenerator {
    fn next_sample(&mut self) -> f64 {
        let sample = self.amplitude * (f64::from(self.sample_index) / PHASE_DIVISOR).sin();
        self.sample_index = self.sample_index.wrapping_add(1);
        self.last_sample = sample;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_reference_sequence() {
        let mut sine = SineGenerator::new();
        for i in 0..1000u32 {
            let expected = (f64::from(i) / 16.0).sin();
            assert_eq!(sine.next_sample(), expected, "sample {}", i);
        }
    }

    #[test]
    fn test_amplitude_scales_output() {
        let mut unit = SineGenerator::new();
        let mut scaled = SineGenerator::with_amplitude(0.5);
        for _ in 0..64 {
            assert_eq!(scaled.next_sample(), 0.5 * unit.next_sample());
        }
    }

    #[test]
    fn test_zero_and_negative_amplitude_are_legal() {
        let mut silent = SineGenerator::with_amplitude(0.0);
        let mut inverted = SineGenerator::with_amplitude(-1.0);
        let mut unit = SineGenerator::new();
        for _ in 0..64 {
            let reference = unit.next_sample();
            assert_eq!(silent.next_sample(), 0.0);
            assert_eq!(inverted.next_sample(), -reference);
        }
    }

    #[test]
    fn test_fresh_generators_are_reproducible() {
        let a: Vec<f64> = {
            let mut sine = SineGenerator::new();
            (0..128).map(|_| sine.next_sample()).collect()
        };
        let b: Vec<f64> = {
            let mut sine = SineGenerator::new();
            (0..128).map(|_| sine.next_sample()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_last_sample_tracks_output() {
        let mut sine = SineGenerator::new();
        assert_eq!(sine.last_sample(), 0.0);
        let sample = sine.next_sample();
        assert_eq!(sine.last_sample(), sample);
        let sample = sine.next_sample();
        assert_eq!(sine.last_sample(), sample);
    }

    #[test]
    fn test_index_wraps_without_panic() {
        let mut sine = SineGenerator::new();
        sine.sample_index = u32::MAX;
        sine.next_sample();
        // Wrapped back to the start of the sequence
        assert_eq!(sine.next_sample(), 0.0);
    }
}
