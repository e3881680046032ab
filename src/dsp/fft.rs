//! Shared DFT primitive
//!
//! Every spectral path (magnitude spectrum, efficiency metrics, Welch
//! segments) goes through `FftProcessor`, and the spectrum and metrics paths
//! both read their bins from `OneSidedSpectrum`, so their frequency axes are
//! identical bin for bin.

use std::sync::Arc;

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};

/// Forward FFT of a fixed size over real input
pub struct FftProcessor {
    fft: Arc<dyn Fft<f64>>,
    fft_size: usize,
}

impl FftProcessor {
    /// Create a new FFT processor with the given size
    pub fn new(fft_size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(fft_size);
        Self { fft, fft_size }
    }

    /// Full complex spectrum of `samples`.
    /// Input longer than `fft_size` is truncated, shorter input is zero padded.
    pub fn transform(&self, samples: &[f64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = samples
            .iter()
            .take(self.fft_size)
            .map(|&s| Complex64::new(s, 0.0))
            .collect();
        buffer.resize(self.fft_size, Complex64::new(0.0, 0.0));

        if self.fft_size > 0 {
            self.fft.process(&mut buffer);
        }
        buffer
    }

    /// Get the FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
}

/// Number of bins with non-negative frequency under the `fftfreq` convention.
/// For even `n` the Nyquist bin counts as negative.
pub fn non_negative_bin_count(n: usize) -> usize {
    (n + 1) / 2
}

/// Frequency of bin `k` for an `n`-point transform at `sampling_rate`
pub fn bin_frequency(k: usize, n: usize, sampling_rate: f64) -> f64 {
    k as f64 * (sampling_rate / n as f64)
}

/// DFT bins at frequencies >= 0, with their frequency axis
#[derive(Debug, Clone)]
pub struct OneSidedSpectrum {
    frequencies: Vec<f64>,
    bins: Vec<Complex64>,
}

impl OneSidedSpectrum {
    /// Transform the whole signal and keep the non-negative-frequency bins
    pub fn compute(samples: &[f64], sampling_rate: f64) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self {
                frequencies: Vec::new(),
                bins: Vec::new(),
            };
        }
        let processor = FftProcessor::new(n);
        let mut bins = processor.transform(samples);
        bins.truncate(non_negative_bin_count(n));

        let frequencies = (0..bins.len())
            .map(|k| bin_frequency(k, n, sampling_rate))
            .collect();

        log::trace!("one-sided spectrum: n={n}, bins={}", bins.len());
        Self { frequencies, bins }
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// |X[k]|
    pub fn magnitude(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    /// |X[k]|^2
    pub fn power(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm_sqr()).collect()
    }
}
