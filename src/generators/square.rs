//! Square tone generator implementation.

use crate::Signal;

use super::PHASE_DIVISOR;

/// A square tone generator.
///
/// Produces `amplitude * sign(sin(sample_index / 16))`, where `sign` maps
/// positive values to +1, negative values to -1, and zero to 0. Every output
/// is therefore one of `-amplitude`, `0.0`, or `+amplitude`. The phase
/// recurrence and index wrapping behave exactly as in
/// [`SineGenerator`](crate::SineGenerator).
pub struct SquareGenerator {
    amplitude: f64,
    sample_index: u32,
    last_sample: f64,
}

impl SquareGenerator {
    /// Creates a new square generator with the default amplitude of 1.0.
    pub fn new() -> Self {
        Self::with_amplitude(1.0)
    }

    /// Creates a new square generator with the given amplitude.
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

impl Default for SquareGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Signal for SquareGenerator {
    fn next_sample(&mut self) -> f64 {
        let phase = (f64::from(self.sample_index) / PHASE_DIVISOR).sin();
        let sample = self.amplitude * sign(phase);
        self.sample_index = self.sample_index.wrapping_add(1);
        self.last_sample = sample;
        sample
    }
}
