//! Audio output backend contract.
//!
//! The driver talks to the platform audio API through this seam so the
//! state machine and render path can be exercised against a mock backend
//! in tests. [`CpalBackend`](crate::CpalBackend) is the production
//! implementor.

use thiserror::Error;

/// Render callback invoked on the backend's real-time audio thread.
///
/// Receives the interleaved output slice for one period and must fill all
/// of it before returning. Implementations must not block, allocate, or
/// perform I/O inside the callback.
pub type RenderCallback = Box<dyn FnMut(&mut [f32]) + Send + 'static>;

/// Errors reported by the playback driver and its backends.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No default output device could be resolved.
    #[error("no default audio output device available")]
    NoOutputDevice,
    /// `initialize` was called with a channel count of zero.
    #[error("channel count must be at least 1")]
    NoChannels,
    /// The backend rejected the requested stream configuration.
    #[error("failed to open output stream: {0}")]
    OpenStream(String),
    /// The backend failed to start an open stream.
    #[error("failed to start output stream: {0}")]
    StartStream(String),
    /// The backend failed to stop a running stream.
    #[error("failed to stop output stream: {0}")]
    StopStream(String),
    /// `start` was called with no open stream.
    #[error("stream is not open")]
    NotOpen,
    /// `start` was called while already streaming.
    #[error("stream is already streaming")]
    AlreadyStreaming,
    /// `stop` was called while not streaming.
    #[error("stream is not streaming")]
    NotStreaming,
}

/// Everything needed to open one output stream.
pub struct StreamDesc {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of interleaved output channels
    pub channels: u16,
    /// Requested period size in frames per callback invocation
    pub period_size: u32,
    /// Render callback, invoked once per period while the stream runs
    pub callback: RenderCallback,
}

/// An open output stream.
///
/// Streams are created stopped; dropping a stream closes it and releases
/// the render callback.
pub trait OutputStream {
    /// Engages the render callback.
    fn start(&mut self) -> Result<(), PlaybackError>;

    /// Disengages the render callback. The backend guarantees the callback
    /// is not mid-invocation when this returns.
    fn stop(&mut self) -> Result<(), PlaybackError>;
}

/// An audio output backend: resolves the default output device and opens
/// streams on it.
pub trait AudioBackend {
    type Stream: OutputStream;

    /// Opens an output stream for the given description.
    ///
    /// Device resolution and format negotiation failures are surfaced as
    /// errors, never panics.
    fn open_output(&mut self, desc: StreamDesc) -> Result<Self::Stream, PlaybackError>;
}
