//! FFT magnitude spectrum and Welch PSD

use crate::domain::{EncodingParameters, Signal, SpectralSummary};
use crate::dsp::welch::{segment_len, WelchPsd};
use crate::dsp::OneSidedSpectrum;

use super::metrics::metrics;

/// Divide by the largest value. All-zero (or empty) input is returned as is.
pub fn normalize_peak(mut values: Vec<f64>) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > 0.0 {
        for v in &mut values {
            *v /= max;
        }
    }
    values
}

/// Normalized magnitude spectrum: (frequencies, |X[k]| / max)
pub fn fft_spectrum(signal: &Signal, sampling_rate: f64) -> (Vec<f64>, Vec<f64>) {
    let spectrum = OneSidedSpectrum::compute(signal.samples(), sampling_rate);
    let magnitude = normalize_peak(spectrum.magnitude());
    (spectrum.frequencies().to_vec(), magnitude)
}

/// Normalized Welch PSD with segments of min(256, len / 4) samples
pub fn psd(signal: &Signal, sampling_rate: f64) -> (Vec<f64>, Vec<f64>) {
    let welch = WelchPsd::new(segment_len(signal.len()));
    let estimate = welch.estimate(signal.samples(), sampling_rate);
    log::trace!(
        "welch psd: nperseg={}, segments={}",
        welch.segment_len(),
        estimate.segments
    );
    (estimate.frequencies, normalize_peak(estimate.psd))
}

/// Full spectral summary of one signal
pub fn analyze(signal: &Signal, params: &EncodingParameters) -> SpectralSummary {
    let sampling_rate = params.sampling_rate();
    let (frequencies_fft, magnitude) = fft_spectrum(signal, sampling_rate);
    let (frequencies_psd, psd) = psd(signal, sampling_rate);

    SpectralSummary {
        frequencies_fft,
        magnitude,
        frequencies_psd,
        psd,
        metrics: metrics(signal, params.data_rate, sampling_rate),
    }
}
