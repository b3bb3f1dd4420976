//! Audio buffer and WAV decoding
//!
//! This module provides the raw-sample data structure and file input.

mod buffer;
mod io;

pub use buffer::AudioBuffer;
pub use io::load_wav;
