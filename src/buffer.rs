//! Typed container for a block of raw interleaved audio data.

/// Binary representation of a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Signed 16-bit integer samples
    Int16,
    /// 32-bit floating point samples
    Float32,
}

impl SampleFormat {
    /// Returns the width of one sample in bytes.
    pub fn bytes_per_sample(self) -> usize {
        match self {
            SampleFormat::Int16 => 2,
            SampleFormat::Float32 => 4,
        }
    }

    /// Returns the width of one sample in bits.
    pub fn bit_depth(self) -> u32 {
        match self {
            SampleFormat::Int16 => 16,
            SampleFormat::Float32 => 32,
        }
    }
}

/// One block of raw interleaved audio data.
///
/// The byte region is allocated once at construction, exclusively owned, and
/// never resized: its length is always exactly
/// `frames * channels * bytes_per_sample(format)`.
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    frames: u32,
    channels: u32,
    sample_rate: u32,
    format: SampleFormat,
    data: Vec<u8>,
}

impl AudioBuffer {
    /// Creates a zero-filled buffer for the given block geometry.
    ///
    /// # Arguments
    ///
    /// * `frames` - Samples per channel in this block
    /// * `channels` - Number of interleaved channels
    /// * `sample_rate` - Sample rate in Hz
    /// * `format` - Binary sample representation
    pub fn new(frames: u32, channels: u32, sample_rate: u32, format: SampleFormat) -> Self {
        let len = frames as usize * channels as usize * format.bytes_per_sample();
        Self {
            frames,
            channels,
            sample_rate,
            format,
            data: vec![0; len],
        }
    }

    /// Samples per channel in this block.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Binary sample representation.
    pub fn format(&self) -> SampleFormat {
        self.format
    }

    /// Total number of samples across all channels.
    pub fn sample_count(&self) -> u32 {
        self.frames * self.channels
    }

    /// Size of the byte region.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read access to the raw bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Write access to the raw bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
