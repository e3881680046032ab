//! Spectral analysis of encoded waveforms
//!
//! - `fft_spectrum`: normalized |DFT| over the non-negative bins
//! - `psd`: normalized Welch power spectral density
//! - `metrics`: DC share, 90% bandwidth, peak frequency and efficiency figures
//!
//! Normalized outputs peak at exactly 1.0. A silent signal leaves them at zero.

pub mod analyzer;
pub mod metrics;

pub use analyzer::{analyze, fft_spectrum, normalize_peak, psd};
pub use metrics::metrics;
