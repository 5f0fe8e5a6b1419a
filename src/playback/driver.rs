//! Playback driver: bridges a tone generator to an output stream.

use log::{debug, info};

use crate::generators::{GeneratorKind, ToneGenerator};
use crate::signal::Signal;

use super::backend::{AudioBackend, OutputStream, PlaybackError, StreamDesc};
use super::output::CpalBackend;

/// Default period size in frames per callback invocation.
pub const DEFAULT_PERIOD_SIZE: u32 = 512;

/// Lifecycle state of the driver's output stream.
///
/// Stopping always closes the stream, so there is no stopped-but-open
/// state: `stop` takes the driver straight back to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// No stream is open
    Closed,
    /// A stream is open but the callback is not engaged
    Open,
    /// The callback is being invoked at period boundaries
    Streaming,
}

/// Owns an open output stream and the tone generator feeding it.
///
/// The driver walks `Closed -> Open -> Streaming -> Closed`. The generator
/// is moved into the render callback, which owns it exclusively: it is
/// mutated only on the backend's audio thread, so the callback takes no
/// locks, allocates nothing, and performs no I/O. It lives exactly as long
/// as the stream the driver holds.
///
/// # Examples
///
/// ```no_run
/// use tonegen::{GeneratorKind, PlaybackDriver};
///
/// let mut driver = PlaybackDriver::new();
/// driver.initialize(44100, 1, GeneratorKind::Sine)?;
/// driver.start()?;
/// // ... playing ...
/// driver.stop()?;
/// # Ok::<(), tonegen::PlaybackError>(())
/// ```
pub struct PlaybackDriver<B: AudioBackend = CpalBackend> {
    backend: B,
    stream: Option<B::Stream>,
    sample_rate: u32,
    channels: u16,
    period_size: u32,
    state: StreamState,
}

impl PlaybackDriver<CpalBackend> {
    /// Creates a driver on the default cpal backend.
    pub fn new() -> Self {
        Self::with_backend(CpalBackend::new())
    }
}

impl Default for PlaybackDriver<CpalBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: AudioBackend> PlaybackDriver<B> {
    /// Creates a driver on a custom backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            stream: None,
            sample_rate: 0,
            channels: 0,
            period_size: DEFAULT_PERIOD_SIZE,
            state: StreamState::Closed,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Configured sample rate in Hz (0 before the first initialize).
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Configured channel count (0 before the first initialize).
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Requested period size in frames per callback invocation.
    pub fn period_size(&self) -> u32 {
        self.period_size
    }

    /// Opens an output stream and installs a fresh generator of the given
    /// kind.
    ///
    /// Any previously open stream (and the generator it owns) is torn down
    /// first, so re-initializing while streaming is legal. A channel count
    /// of zero is rejected up front without touching existing state; on any
    /// other failure the driver is left Closed. Each frame receives one
    /// generator sample duplicated across all `channels` outputs.
    pub fn initialize(
        &mut self,
        sample_rate: u32,
        channels: u16,
        kind: GeneratorKind,
    ) -> Result<(), PlaybackError> {
        if channels == 0 {
            return Err(PlaybackError::NoChannels);
        }
        self.teardown();

        // The callback owns the generator outright; the host never touches
        // it again, so rendering takes no locks.
        let mut generator = ToneGenerator::new(kind);
        let frame_channels = channels as usize;
        let callback = Box::new(move |data: &mut [f32]| {
            write_frames(&mut generator, data, frame_channels);
        });

        let stream = self.backend.open_output(StreamDesc {
            sample_rate,
            channels,
            period_size: self.period_size,
            callback,
        })?;

        self.stream = Some(stream);
        self.sample_rate = sample_rate;
        self.channels = channels;
        self.state = StreamState::Open;
        info!(
            "opened output stream: {} Hz, {} channel(s), {:?} generator",
            sample_rate, channels, kind
        );
        Ok(())
    }

    /// Engages the render callback, transitioning Open -> Streaming.
    ///
    /// Fails with [`PlaybackError::AlreadyStreaming`] if already streaming
    /// and [`PlaybackError::NotOpen`] if no stream is open; neither alters
    /// the stream.
    pub fn start(&mut self) -> Result<(), PlaybackError> {
        if self.state == StreamState::Streaming {
            return Err(PlaybackError::AlreadyStreaming);
        }
        let stream = self.stream.as_mut().ok_or(PlaybackError::NotOpen)?;
        stream.start()?;
        self.state = StreamState::Streaming;
        info!("streaming started");
        Ok(())
    }

    /// Disengages the render callback and closes the stream, transitioning
    /// Streaming -> Closed.
    ///
    /// Fails with [`PlaybackError::NotStreaming`] if not currently
    /// streaming, leaving state unchanged.
    pub fn stop(&mut self) -> Result<(), PlaybackError> {
        if self.state != StreamState::Streaming {
            return Err(PlaybackError::NotStreaming);
        }
        if let Some(stream) = self.stream.as_mut() {
            stream.stop()?;
        }
        // Closing drops the stream and with it the callback-owned
        // generator; the backend has already disengaged the callback.
        self.stream = None;
        self.state = StreamState::Closed;
        info!("streaming stopped, stream closed");
        Ok(())
    }

    /// Stops (if needed) and releases the stream and the generator it owns.
    fn teardown(&mut self) {
        if self.state == StreamState::Streaming
            && let Some(stream) = self.stream.as_mut()
        {
            debug!("tearing down active stream before re-initialization");
            let _ = stream.stop();
        }
        self.stream = None;
        self.state = StreamState::Closed;
    }
}

impl<B: AudioBackend> Drop for PlaybackDriver<B> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Fills an interleaved output slice, one generator sample per frame,
/// duplicated across all channels of the frame.
fn write_frames(generator: &mut ToneGenerator, data: &mut [f32], channels: usize) {
    for frame in data.chunks_mut(channels) {
        let sample = generator.next_sample() as f32;
        for slot in frame.iter_mut() {
            *slot = sample;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::backend::RenderCallback;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend whose streams accept every transition and exclusively own
    /// their render callback (and through it, the generator). Live streams
    /// are counted so tests can verify owned-resource release.
    struct NullBackend {
        fail_open: bool,
        live_streams: Arc<AtomicUsize>,
    }

    impl NullBackend {
        fn new() -> Self {
            Self {
                fail_open: false,
                live_streams: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    struct NullStream {
        _callback: RenderCallback,
        live_streams: Arc<AtomicUsize>,
    }

    impl OutputStream for NullStream {
        fn start(&mut self) -> Result<(), PlaybackError> {
            Ok(())
        }

        fn stop(&mut self) -> Result<(), PlaybackError> {
            Ok(())
        }
    }

    impl Drop for NullStream {
        fn drop(&mut self) {
            self.live_streams.fetch_sub(1, Ordering::SeqCst);
        }
    }

    impl AudioBackend for NullBackend {
        type Stream = NullStream;

        fn open_output(&mut self, desc: StreamDesc) -> Result<NullStream, PlaybackError> {
            if self.fail_open {
                return Err(PlaybackError::NoOutputDevice);
            }
            self.live_streams.fetch_add(1, Ordering::SeqCst);
            Ok(NullStream {
                _callback: desc.callback,
                live_streams: Arc::clone(&self.live_streams),
            })
        }
    }

    fn driver() -> PlaybackDriver<NullBackend> {
        PlaybackDriver::with_backend(NullBackend::new())
    }

    #[test]
    fn test_start_before_initialize_fails() {
        let mut driver = driver();
        assert!(matches!(driver.start(), Err(PlaybackError::NotOpen)));
        assert_eq!(driver.state(), StreamState::Closed);
    }

    #[test]
    fn test_stop_before_start_fails() {
        let mut driver = driver();
        assert!(matches!(driver.stop(), Err(PlaybackError::NotStreaming)));

        driver.initialize(44100, 1, GeneratorKind::Sine).unwrap();
        assert!(matches!(driver.stop(), Err(PlaybackError::NotStreaming)));
        assert_eq!(driver.state(), StreamState::Open);
    }

    #[test]
    fn test_double_start_fails() {
        let mut driver = driver();
        driver.initialize(44100, 1, GeneratorKind::Sine).unwrap();
        driver.start().unwrap();
        assert!(matches!(
            driver.start(),
            Err(PlaybackError::AlreadyStreaming)
        ));
        assert_eq!(driver.state(), StreamState::Streaming);
    }

    #[test]
    fn test_lifecycle_reaches_closed() {
        let mut driver = driver();
        driver.initialize(48000, 2, GeneratorKind::Square).unwrap();
        assert_eq!(driver.state(), StreamState::Open);
        assert_eq!(driver.sample_rate(), 48000);
        assert_eq!(driver.channels(), 2);

        driver.start().unwrap();
        assert_eq!(driver.state(), StreamState::Streaming);

        driver.stop().unwrap();
        assert_eq!(driver.state(), StreamState::Closed);
    }

    #[test]
    fn test_failed_initialize_leaves_driver_closed() {
        let mut driver = PlaybackDriver::with_backend(NullBackend {
            fail_open: true,
            ..NullBackend::new()
        });
        assert!(matches!(
            driver.initialize(44100, 1, GeneratorKind::Sine),
            Err(PlaybackError::NoOutputDevice)
        ));
        assert_eq!(driver.state(), StreamState::Closed);
        assert!(matches!(driver.start(), Err(PlaybackError::NotOpen)));
    }

    #[test]
    fn test_initialize_rejects_zero_channels() {
        let mut driver = driver();
        assert!(matches!(
            driver.initialize(44100, 0, GeneratorKind::Sine),
            Err(PlaybackError::NoChannels)
        ));
        assert_eq!(driver.state(), StreamState::Closed);
        assert!(matches!(driver.start(), Err(PlaybackError::NotOpen)));
    }

    #[test]
    fn test_zero_channels_leaves_existing_stream_untouched() {
        let mut driver = driver();
        driver.initialize(44100, 1, GeneratorKind::Sine).unwrap();
        driver.start().unwrap();

        assert!(matches!(
            driver.initialize(44100, 0, GeneratorKind::Square),
            Err(PlaybackError::NoChannels)
        ));
        assert_eq!(driver.state(), StreamState::Streaming);
        driver.stop().unwrap();
    }

    #[test]
    fn test_reinitialize_releases_previous_stream_and_generator() {
        let mut driver = driver();
        let live = Arc::clone(&driver.backend.live_streams);

        driver.initialize(44100, 1, GeneratorKind::Sine).unwrap();
        driver.start().unwrap();
        assert_eq!(live.load(Ordering::SeqCst), 1);

        driver.initialize(44100, 1, GeneratorKind::Square).unwrap();

        // The previous stream, and the generator its callback owned, are
        // gone; only the replacement remains.
        assert_eq!(live.load(Ordering::SeqCst), 1);
        assert_eq!(driver.state(), StreamState::Open);

        // The replacement stream is usable
        driver.start().unwrap();
        driver.stop().unwrap();
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_releases_stream() {
        let mut driver = driver();
        let live = Arc::clone(&driver.backend.live_streams);
        driver.initialize(44100, 1, GeneratorKind::Sine).unwrap();
        driver.start().unwrap();
        drop(driver);
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_write_frames_duplicates_sample_across_channels() {
        let mut generator = ToneGenerator::new(GeneratorKind::Sine);
        let mut data = vec![0.0f32; 8 * 2];
        write_frames(&mut generator, &mut data, 2);
        for (i, frame) in data.chunks(2).enumerate() {
            let expected = (i as f64 / 16.0).sin() as f32;
            assert_eq!(frame[0], expected);
            assert_eq!(frame[1], expected);
        }
    }

    #[test]
    fn test_write_frames_mono_matches_reference_sequence() {
        let mut generator = ToneGenerator::new(GeneratorKind::Sine);
        let mut data = vec![0.0f32; 64];
        write_frames(&mut generator, &mut data, 1);
        for (i, sample) in data.iter().enumerate() {
            assert_eq!(*sample, (i as f64 / 16.0).sin() as f32);
        }
    }
}
