//! Audio file input
//!
//! Decodes WAV files into raw-sample buffers using the hound crate.

use crate::audio::AudioBuffer;
use crate::error::{Result, WavescopeError};
use hound::{SampleFormat, WavReader};
use std::path::Path;

/// Load an integer-PCM WAV file into an AudioBuffer.
///
/// Samples are kept in their raw container units. IEEE-float WAVs are
/// rejected: the inspector's data model is raw signed integers.
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<AudioBuffer> {
    let path = path.as_ref();
    let reader = WavReader::open(path).map_err(|e| WavescopeError::AudioRead {
        path: path.display().to_string(),
        source: e,
    })?;

    let spec = reader.spec();
    let channels = spec.channels;
    let sample_rate = spec.sample_rate;

    let samples: Vec<i32> = match spec.sample_format {
        SampleFormat::Int => reader
            .into_samples::<i32>()
            .map(|s| {
                s.map_err(|e| WavescopeError::AudioRead {
                    path: path.display().to_string(),
                    source: e,
                })
            })
            .collect::<Result<Vec<i32>>>()?,
        SampleFormat::Float => {
            return Err(WavescopeError::InvalidFormat {
                details: format!(
                    "{}: {}-bit float WAV; expected integer PCM",
                    path.display(),
                    spec.bits_per_sample
                ),
            });
        }
    };

    AudioBuffer::new(samples, channels, sample_rate)
}
