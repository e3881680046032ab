//! Line-coding waveforms and their spectra
//!
//! Encodes a bit sequence as NRZ-L, RZ, Manchester and AMI waveforms, then
//! measures each one in the frequency domain (magnitude spectrum, Welch PSD,
//! DC share, 90% bandwidth, spectral efficiency).
//!
//! ## Layout
//!
//! - `domain/` - Pure domain types, errors and configuration
//! - `dsp/` - Signal processing primitives (FFT, Welch PSD)
//! - `linecode/` - Bit generation and line encoders
//! - `spectral/` - Spectrum, PSD and efficiency metrics for one signal
//! - `pipeline` - Runs every scheme for one bit sequence
//!
//! ## Example
//!
//! ```rust
//! use linecode_lib::domain::EncodingScheme;
//! use linecode_lib::pipeline::run_full_analysis;
//!
//! let results = run_full_analysis(&[1, 0, 1, 1], 8, 1.0).unwrap();
//! let ami = &results[&EncodingScheme::Ami];
//! assert_eq!(ami.frequencies_fft.len(), ami.magnitude.len());
//! ```

// Core domain (pure, no I/O)
pub mod domain;
pub mod dsp;
pub mod linecode;
pub mod spectral;

// Orchestration
pub mod pipeline;

pub use domain::{
    AnalysisConfig, BitSequence, EfficiencyMetrics, EncodingParameters, EncodingScheme,
    LineCodeError, LineCodeResult, Signal, SpectralSummary, WaveformView,
};
pub use linecode::{encode, random_bits};
pub use pipeline::{run_encoding_only, run_full_analysis, waveform_view};
