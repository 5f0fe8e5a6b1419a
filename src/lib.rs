//! Tonegen - a minimal real-time tone generator
//!
//! This library provides pull-based signal sources (sine, square, white noise)
//! and a playback driver that feeds them to an audio output stream.

pub mod buffer;
pub mod generators;
pub mod playback;
pub mod signal;

// Re-export commonly used types at the crate root
pub use buffer::{AudioBuffer, SampleFormat};
pub use generators::{
    GeneratorKind, SineGenerator, SquareGenerator, ToneGenerator, WhiteNoiseGenerator,
};
pub use playback::{
    AudioBackend, CpalBackend, OutputStream, PlaybackDriver, PlaybackError, RenderCallback,
    StreamDesc, StreamState,
};
pub use signal::Signal;
