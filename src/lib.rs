//! Wavescope - WAV waveform inspection
//!
//! Wavescope loads a PCM WAV file, isolates its left channel, computes the
//! minimum and maximum sample values, reports them, and renders a chart of
//! the waveform with constant reference lines at the extrema.
//!
//! # Architecture
//!
//! - [`audio`]: raw-sample buffer and WAV decoding
//! - [`chart`]: the chart-rendering capability and its plotters backend
//! - [`inspect`]: the inspector tying decode, reduction, and rendering together

pub mod audio;
pub mod chart;
pub mod error;
pub mod inspect;

// Re-export commonly used types
pub use audio::AudioBuffer;
pub use error::{Result, WavescopeError};
pub use inspect::{InspectionReport, WaveformInspector};
