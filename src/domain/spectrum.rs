//! Analysis result records
//!
//! Field names are part of the JSON contract with plotting front ends.

use serde::Serialize;

use super::types::Signal;

/// Scalar spectral-efficiency figures for one signal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EfficiencyMetrics {
    /// Power at 0 Hz as a percentage of total power
    pub dc_component: f64,
    /// Frequency (Hz) below which 90% of the power lies
    pub bandwidth_90: f64,
    /// data_rate / bandwidth_90, in bits/Hz
    pub spectral_efficiency: f64,
    /// Strongest non-DC frequency (Hz)
    pub peak_frequency: f64,
    /// bandwidth_90 / data_rate
    pub bandwidth_efficiency: f64,
    /// Sum of |X[k]|^2 over the non-negative bins
    pub total_power: f64,
}

/// Frequency-domain view of one encoded signal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectralSummary {
    pub frequencies_fft: Vec<f64>,
    /// Normalized |FFT|, co-indexed with `frequencies_fft`
    pub magnitude: Vec<f64>,
    pub frequencies_psd: Vec<f64>,
    /// Normalized Welch PSD, co-indexed with `frequencies_psd`
    pub psd: Vec<f64>,
    pub metrics: EfficiencyMetrics,
}

/// Time-domain plot data for every scheme
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveformView {
    /// Sample instants in seconds
    pub time: Vec<f64>,
    /// Upsampled input bits
    pub original: Vec<f64>,
    pub nrz_l: Signal,
    pub rz: Signal,
    pub manchester: Signal,
    pub ami: Signal,
}
