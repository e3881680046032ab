//! Welch power spectral density
//!
//! Averages Hann-windowed, mean-detrended periodograms over half-overlapping
//! segments. Density scaling, one-sided output.

use std::f64::consts::PI;

use super::fft::{bin_frequency, FftProcessor};

/// Longest segment used for PSD estimation
pub const MAX_SEGMENT_LEN: usize = 256;

/// Segment length for a signal of `signal_len` samples: min(256, len / 4), at least 1
pub fn segment_len(signal_len: usize) -> usize {
    MAX_SEGMENT_LEN.min(signal_len / 4).max(1)
}

/// Periodic Hann window of `size` points. A single point window is [1.0].
pub fn hann_periodic(size: usize) -> Vec<f64> {
    if size == 1 {
        return vec![1.0];
    }
    (0..size)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / size as f64).cos()))
        .collect()
}

/// PSD estimate with its frequency axis
#[derive(Debug, Clone, PartialEq)]
pub struct WelchEstimate {
    pub frequencies: Vec<f64>,
    /// Power per Hz
    pub psd: Vec<f64>,
    pub segments: usize,
}

/// Welch estimator for a fixed segment length
pub struct WelchPsd {
    segment_len: usize,
    overlap: usize,
    window: Vec<f64>,
    window_power: f64,
    fft: FftProcessor,
}

impl WelchPsd {
    pub fn new(segment_len: usize) -> Self {
        let segment_len = segment_len.max(1);
        let window = hann_periodic(segment_len);
        let window_power = window.iter().map(|w| w * w).sum();
        Self {
            segment_len,
            overlap: segment_len / 2,
            window,
            window_power,
            fft: FftProcessor::new(segment_len),
        }
    }

    pub fn segment_len(&self) -> usize {
        self.segment_len
    }

    /// Estimate the one-sided PSD of `samples` at `sampling_rate`
    pub fn estimate(&self, samples: &[f64], sampling_rate: f64) -> WelchEstimate {
        let n = self.segment_len;
        let num_bins = n / 2 + 1;
        let frequencies = (0..num_bins)
            .map(|k| bin_frequency(k, n, sampling_rate))
            .collect();

        let step = n - self.overlap;
        let segments = if samples.len() >= n {
            (samples.len() - self.overlap) / step
        } else {
            0
        };

        let mut psd = vec![0.0; num_bins];
        if segments == 0 {
            return WelchEstimate {
                frequencies,
                psd,
                segments,
            };
        }

        let scale = 1.0 / (sampling_rate * self.window_power);
        for seg in 0..segments {
            let chunk = &samples[seg * step..seg * step + n];
            let mean = chunk.iter().sum::<f64>() / n as f64;
            let windowed: Vec<f64> = chunk
                .iter()
                .zip(&self.window)
                .map(|(&s, &w)| (s - mean) * w)
                .collect();

            let bins = self.fft.transform(&windowed);
            for (acc, bin) in psd.iter_mut().zip(&bins[..num_bins]) {
                *acc += bin.norm_sqr() * scale;
            }
        }

        // Fold negative frequencies in; DC and an even-length Nyquist bin have no mirror.
        let fold_end = if n % 2 == 0 { num_bins - 1 } else { num_bins };
        for value in psd.iter_mut().take(fold_end).skip(1) {
            *value *= 2.0;
        }

        for value in &mut psd {
            *value /= segments as f64;
        }

        WelchEstimate {
            frequencies,
            psd,
            segments,
        }
    }
}
