//! Tone generators.
//!
//! This module contains the individual generator implementations, the
//! `GeneratorKind` selector, and the `ToneGenerator` sum type that the
//! playback driver dispatches over.

mod sine;
mod square;
mod white;

pub use sine::SineGenerator;
pub use square::SquareGenerator;
pub use white::WhiteNoiseGenerator;

use crate::Signal;

/// Divisor applied to the running sample index of the periodic generators.
///
/// The phase advances by 1/16 per sample regardless of sample rate, so the
/// audible pitch scales with the playback rate. Kept as-is so generator
/// output is reproducible across runs and platforms.
pub(crate) const PHASE_DIVISOR: f64 = 16.0;

/// The kinds of tone generator the driver can construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorKind {
    /// Sine wave (the default)
    #[default]
    Sine,
    /// Square wave
    Square,
    /// Uniform white noise
    WhiteNoise,
}

impl GeneratorKind {
    /// Resolves a numeric selector (as taken on the command line) to a kind.
    ///
    /// 1 selects square, 2 selects white noise, and any other value falls
    /// back to sine.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonegen::GeneratorKind;
    ///
    /// assert_eq!(GeneratorKind::from_selector(2), GeneratorKind::WhiteNoise);
    /// assert_eq!(GeneratorKind::from_selector(99), GeneratorKind::Sine);
    /// ```
    pub fn from_selector(selector: u32) -> Self {
        match selector {
            1 => GeneratorKind::Square,
            2 => GeneratorKind::WhiteNoise,
            _ => GeneratorKind::Sine,
        }
    }
}

/// A tone generator of any supported kind.
///
/// Constructed with the reference defaults for each variant: amplitude 1.0
/// for the periodic waveforms, 0.25 for white noise.
pub enum ToneGenerator {
    Sine(SineGenerator),
    Square(SquareGenerator),
    WhiteNoise(WhiteNoiseGenerator),
}

impl ToneGenerator {
    /// Creates a generator of the given kind with its default amplitude.
    pub fn new(kind: GeneratorKind) -> Self {
        match kind {
            GeneratorKind::Sine => ToneGenerator::Sine(SineGenerator::new()),
            GeneratorKind::Square => ToneGenerator::Square(SquareGenerator::new()),
            GeneratorKind::WhiteNoise => ToneGenerator::WhiteNoise(WhiteNoiseGenerator::new()),
        }
    }

    /// Returns which kind of generator this is.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            ToneGenerator::Sine(_) => GeneratorKind::Sine,
            ToneGenerator::Square(_) => GeneratorKind::Square,
            ToneGenerator::WhiteNoise(_) => GeneratorKind::WhiteNoise,
        }
    }
}

impl Signal for ToneGenerator {
    fn next_sample(&mut self) -> f64 {
        match self {
            ToneGenerator::Sine(g) => g.next_sample(),
            ToneGenerator::Square(g) => g.next_sample(),
            ToneGenerator::WhiteNoise(g) => g.next_sample(),
        }
    }
}
