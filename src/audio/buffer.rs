//! Audio buffer implementation
//!
//! AudioBuffer holds decoded samples in their raw integer form, exactly as
//! stored in the container. No normalization is applied; extrema reported
//! downstream are in the same units as the file's PCM values.

use crate::error::{Result, WavescopeError};

/// Interleaved raw PCM samples with metadata
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    /// Interleaved signed integer samples, raw container units
    samples: Vec<i32>,
    /// Number of audio channels (1 = mono, 2 = stereo)
    channels: u16,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a new audio buffer with the given parameters
    pub fn new(samples: Vec<i32>, channels: u16, sample_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Err(WavescopeError::EmptyBuffer);
        }
        if channels == 0 {
            return Err(WavescopeError::InvalidFormat {
                details: "Channel count is zero".to_string(),
            });
        }
        if samples.len() % channels as usize != 0 {
            return Err(WavescopeError::InvalidFormat {
                details: format!(
                    "Sample count {} is not divisible by channel count {}",
                    samples.len(),
                    channels
                ),
            });
        }
        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Create an all-zero buffer with the given duration
    pub fn silence(duration_secs: f32, channels: u16, sample_rate: u32) -> Self {
        let num_samples = (duration_secs * sample_rate as f32) as usize * channels as usize;
        Self {
            samples: vec![0; num_samples],
            channels,
            sample_rate,
        }
    }

    /// Get a reference to the interleaved samples
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Get the number of channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of frames (samples per channel)
    pub fn num_frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// Get the duration in seconds
    pub fn duration(&self) -> f32 {
        self.num_frames() as f32 / self.sample_rate as f32
    }

    /// De-interleave one channel (0-indexed) into its own sequence.
    ///
    /// A channel index beyond the buffer's channel count is an explicit
    /// format error, never an empty result.
    pub fn channel_samples(&self, channel: u16) -> Result<Vec<i32>> {
        if channel >= self.channels {
            return Err(WavescopeError::InvalidFormat {
                details: format!(
                    "Channel {} requested but buffer has {} channel(s)",
                    channel, self.channels
                ),
            });
        }
        Ok(self
            .samples
            .iter()
            .skip(channel as usize)
            .step_by(self.channels as usize)
            .copied()
            .collect())
    }
}
