//! Core signal source trait.
//!
//! This module provides the fundamental `Signal` trait implemented by every
//! sample source in the library: generators, and anything else that can
//! produce an infinite stream of audio samples one at a time.

/// Common interface for all sample sources.
///
/// A `Signal` is a stateful, infinite, lazy sequence of samples: every call
/// to `next_sample()` produces exactly one new sample and advances internal
/// state. Generation never fails. A source is not restartable — to get the
/// sequence from the beginning again, construct a fresh instance.
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}
