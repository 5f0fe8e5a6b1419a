//! cpal implementation of the output backend.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, SampleRate, StreamConfig};
use log::error;

use super::backend::{AudioBackend, OutputStream, PlaybackError, StreamDesc};

/// Output backend backed by the default cpal host.
pub struct CpalBackend {
    host: cpal::Host,
}

impl CpalBackend {
    /// Creates a backend on the platform's default audio host.
    pub fn new() -> Self {
        Self {
            host: cpal::default_host(),
        }
    }
}

impl Default for CpalBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// An open cpal output stream. Dropping it closes the stream.
pub struct CpalStream {
    stream: cpal::Stream,
}

impl OutputStream for CpalStream {
    fn start(&mut self) -> Result<(), PlaybackError> {
        self.stream
            .play()
            .map_err(|e| PlaybackError::StartStream(e.to_string()))
    }

    fn stop(&mut self) -> Result<(), PlaybackError> {
        self.stream
            .pause()
            .map_err(|e| PlaybackError::StopStream(e.to_string()))
    }
}

impl AudioBackend for CpalBackend {
    type Stream = CpalStream;

    fn open_output(&mut self, desc: StreamDesc) -> Result<CpalStream, PlaybackError> {
        let device = self
            .host
            .default_output_device()
            .ok_or(PlaybackError::NoOutputDevice)?;

        let config = StreamConfig {
            channels: desc.channels,
            sample_rate: SampleRate(desc.sample_rate),
            buffer_size: BufferSize::Fixed(desc.period_size),
        };

        let mut callback = desc.callback;
        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| callback(data),
                |err| error!("audio stream error: {}", err),
                None,
            )
            .map_err(|e| PlaybackError::OpenStream(e.to_string()))?;

        // cpal may start a freshly built stream on some hosts; the driver
        // owns the Streaming transition, so park it until start() is called.
        stream
            .pause()
            .map_err(|e| PlaybackError::OpenStream(e.to_string()))?;

        Ok(CpalStream { stream })
    }
}
