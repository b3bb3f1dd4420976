//! Waveform inspection
//!
//! One pass over a WAV file: decode, select the left channel, reduce to
//! extrema, report, and hand three labeled series to a chart renderer.
//!
//! Decoding sits behind the [`AudioDecoder`] trait so inspection logic is
//! testable without files on disk.

use crate::audio::{self, AudioBuffer};
use crate::chart::{ChartRenderer, Series};
use crate::error::Result;
use log::debug;
use std::fmt;
use std::path::Path;

/// The channel the inspector reads: column 0, the left channel
const INSPECTED_CHANNEL: u16 = 0;

/// Capability interface for audio decoding
pub trait AudioDecoder {
    fn decode(&self, path: &Path) -> Result<AudioBuffer>;
}

/// WAV decoder backed by [`audio::load_wav`]
#[derive(Debug, Clone, Default)]
pub struct WavDecoder;

impl AudioDecoder for WavDecoder {
    fn decode(&self, path: &Path) -> Result<AudioBuffer> {
        audio::load_wav(path)
    }
}

/// Minimum and maximum sample values of one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extrema {
    pub max_val: i32,
    pub min_val: i32,
}

impl Extrema {
    /// Total reduction over a non-empty sequence.
    ///
    /// Both values are elements of the input; an empty input is an explicit
    /// error rather than a sentinel pair.
    pub fn of(samples: &[i32]) -> Result<Self> {
        let first = match samples.first() {
            Some(&v) => v,
            None => return Err(crate::WavescopeError::EmptyBuffer),
        };
        let mut max_val = first;
        let mut min_val = first;
        for &v in &samples[1..] {
            max_val = max_val.max(v);
            min_val = min_val.min(v);
        }
        Ok(Self { max_val, min_val })
    }
}

/// Result of one inspection pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionReport {
    /// Base name of the inspected file, used as the waveform series label
    pub file_name: String,
    /// Frame count of the selected channel
    pub num_frames: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Channel extrema in raw sample units
    pub extrema: Extrema,
}

impl fmt::Display for InspectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "max_val={}, min_val={}",
            self.extrema.max_val, self.extrema.min_val
        )?;
        write!(
            f,
            "shape=({},), samplerate={}",
            self.num_frames, self.sample_rate
        )
    }
}

/// Inspects one audio file and charts its left channel with reference
/// lines at the extrema
pub struct WaveformInspector<D, R> {
    decoder: D,
    renderer: R,
}

impl<D, R> WaveformInspector<D, R>
where
    D: AudioDecoder,
    R: ChartRenderer,
{
    pub fn new(decoder: D, renderer: R) -> Self {
        Self { decoder, renderer }
    }

    /// Decode the file, select the left channel, and compute its extrema.
    ///
    /// Any decode or path failure propagates before any output happens.
    pub fn inspect(&self, path: &Path) -> Result<InspectionReport> {
        let (report, _) = self.inspect_channel(path)?;
        Ok(report)
    }

    /// Full pass: inspect, print the report to stdout, then render the
    /// waveform with constant reference lines at the extrema.
    pub fn inspect_and_render(&self, path: &Path) -> Result<InspectionReport> {
        let (report, channel) = self.inspect_channel(path)?;

        // Report before rendering; a render failure still leaves the numbers visible.
        println!("{report}");

        self.renderer.render(&build_series(&report, channel))?;
        Ok(report)
    }

    fn inspect_channel(&self, path: &Path) -> Result<(InspectionReport, Vec<i32>)> {
        let buffer = self.decoder.decode(path)?;
        debug!(
            "decoded {}: {} channel(s), {} frames at {} Hz",
            path.display(),
            buffer.channels(),
            buffer.num_frames(),
            buffer.sample_rate()
        );

        let channel = buffer.channel_samples(INSPECTED_CHANNEL)?;
        let extrema = Extrema::of(&channel)?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let report = InspectionReport {
            file_name,
            num_frames: channel.len(),
            sample_rate: buffer.sample_rate(),
            extrema,
        };
        Ok((report, channel))
    }
}

fn build_series(report: &InspectionReport, channel: Vec<i32>) -> Vec<Series> {
    let n = channel.len();
    vec![
        Series::new(report.file_name.clone(), channel),
        Series::new(
            format!("max_val={}", report.extrema.max_val),
            vec![report.extrema.max_val; n],
        ),
        Series::new(
            format!("min_val={}", report.extrema.min_val),
            vec![report.extrema.min_val; n],
        ),
    ]
}
