//! Wavescope CLI
//!
//! Inspects one WAV file: prints the left channel's extrema and frame
//! count, and writes a chart of the waveform with reference lines at the
//! extrema.

use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use wavescope::chart::PlottersChart;
use wavescope::inspect::WavDecoder;
use wavescope::{Result, WaveformInspector};

#[derive(Parser, Debug)]
#[command(name = "wavescope", version, about = "WAV waveform inspector")]
struct Cli {
    /// Path to the WAV file to inspect
    input: PathBuf,

    /// Where to write the chart (.svg for SVG, anything else for PNG)
    #[arg(short, long, default_value = "waveform.png")]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        eprintln!("hint: {}", e.recovery_hint());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("wavescope v{}", env!("CARGO_PKG_VERSION"));

    let caption = cli
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.display().to_string());

    let inspector = WaveformInspector::new(WavDecoder, PlottersChart::new(&cli.output, caption));
    inspector.inspect_and_render(&cli.input)?;

    info!("chart written to {}", cli.output.display());
    Ok(())
}
