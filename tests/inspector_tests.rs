//! Integration tests
//!
//! End-to-end inspection over real WAV fixtures written to temp
//! directories, including the chart output.

use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;
use tempfile::tempdir;
use wavescope::chart::PlottersChart;
use wavescope::inspect::WavDecoder;
use wavescope::{WaveformInspector, WavescopeError};

/// Write a 16-bit integer PCM fixture from interleaved samples
fn write_wav(path: &Path, channels: u16, sample_rate: u32, samples: &[i16]) {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn test_stereo_extrema_come_from_left_channel_only() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("stereo.wav");
    let chart = dir.path().join("stereo.svg");

    // Left channel spans -1000..2000; right channel exceeds both bounds
    let samples = [
        -1000i16, 30000, 0, -30000, 2000, 30000, 500, -30000,
    ];
    write_wav(&input, 2, 44100, &samples);

    let inspector = WaveformInspector::new(WavDecoder, PlottersChart::new(&chart, "stereo.wav"));
    let report = inspector.inspect_and_render(&input).unwrap();

    assert_eq!(report.extrema.max_val, 2000);
    assert_eq!(report.extrema.min_val, -1000);
    assert_eq!(report.num_frames, 4);
    assert_eq!(report.sample_rate, 44100);
    assert_eq!(report.file_name, "stereo.wav");
    assert!(chart.exists());
}

#[test]
fn test_mono_second_of_silence() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("silence.wav");

    write_wav(&input, 1, 8000, &[0i16; 8000]);

    let inspector =
        WaveformInspector::new(WavDecoder, PlottersChart::new(dir.path().join("s.svg"), "s"));
    let report = inspector.inspect(&input).unwrap();

    assert_eq!(report.extrema.max_val, 0);
    assert_eq!(report.extrema.min_val, 0);
    assert_eq!(report.num_frames, 8000);
    assert_eq!(report.sample_rate, 8000);
    assert_eq!(
        report.to_string(),
        "max_val=0, min_val=0\nshape=(8000,), samplerate=8000"
    );
}

#[test]
fn test_repeated_inspection_is_identical() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tone.wav");

    let samples: Vec<i16> = (0..800)
        .map(|i| ((i as f32 * 0.05).sin() * 12000.0) as i16)
        .collect();
    write_wav(&input, 1, 8000, &samples);

    let inspector =
        WaveformInspector::new(WavDecoder, PlottersChart::new(dir.path().join("t.svg"), "t"));
    let first = inspector.inspect(&input).unwrap();
    let second = inspector.inspect(&input).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_file_fails_before_any_chart_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("no_such_file.wav");
    let chart = dir.path().join("never.svg");

    let inspector = WaveformInspector::new(WavDecoder, PlottersChart::new(&chart, "never"));
    let result = inspector.inspect_and_render(&input);

    assert!(matches!(result, Err(WavescopeError::AudioRead { .. })));
    assert!(!chart.exists());
}

#[test]
fn test_extrema_are_attained_by_channel_elements() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ramp.wav");

    let samples: Vec<i16> = (-100..=100).collect();
    write_wav(&input, 1, 8000, &samples);

    let inspector =
        WaveformInspector::new(WavDecoder, PlottersChart::new(dir.path().join("r.svg"), "r"));
    let report = inspector.inspect(&input).unwrap();

    assert_eq!(report.extrema.max_val, 100);
    assert_eq!(report.extrema.min_val, -100);
    assert_eq!(report.num_frames, 201);
}
